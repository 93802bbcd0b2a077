//! Builds a mapping table for one revision from its loaded records

use crate::loader::Record;
use std::collections::HashMap;

/// One revision's remaps: codepoint key -> ordered replacement codepoints
///
/// Keys are uppercase hexadecimal with no `U+` prefix, exactly as the source
/// data spells them. Values are non-empty; length is 1 except for the four
/// diacritic codepoints that Unicode represents as a base letter plus a
/// combining mark.
pub type MappingTable = HashMap<String, Vec<String>>;

/// Build one mapping table from loader records
///
/// Several source tables carry more than one "from" column (e.g. the
/// HKSCS-2004 table remaps both the ISO/IEC 10646-1:1993 and the
/// ISO/IEC 10646-1:2000 codepoints to the 2003 amendment). Columns are
/// visited in declared order and later entries overwrite earlier ones.
pub fn build_mapping(records: &[Record], from_columns: &[&str], to_column: &str) -> MappingTable {
    let mut mapping = MappingTable::new();

    for record in records {
        let to_cell = cell(record, to_column);
        for from_column in from_columns {
            if let Some((key, value)) = format_key_value_pair(cell(record, from_column), to_cell) {
                mapping.insert(key, value);
            }
        }
    }

    mapping
}

/// A column missing from a truncated row reads as an empty cell
fn cell<'a>(record: &'a Record, column: &str) -> &'a str {
    record.get(column).map(String::as_str).unwrap_or("")
}

/// Normalize one raw (from, to) cell pair into a table entry
///
/// Returns None for pairs that produce no entry: either cell empty, or a
/// self-map. Self-maps are discarded so that resolution can never
/// substitute a key for itself.
fn format_key_value_pair(key: &str, value: &str) -> Option<(String, Vec<String>)> {
    if key.is_empty() || value.is_empty() || key == value {
        return None;
    }

    let key = key.strip_prefix("U+").unwrap_or(key);
    let value = value.strip_prefix("U+").unwrap_or(value);

    if key == value {
        return None;
    }

    // Bracketed values like <00CA,0304> are composed sequences: one legacy
    // codepoint that Unicode spells as a base letter plus combining mark
    let values = match value.strip_prefix('<').and_then(|v| v.strip_suffix('>')) {
        Some(inner) => inner.split(',').map(|c| c.trim().to_string()).collect(),
        None => vec![value.to_string()],
    };

    Some((key.to_string(), values))
}
