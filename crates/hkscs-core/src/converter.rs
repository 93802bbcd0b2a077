//! Resolution engine: walks the revision chain for one codepoint at a time

use crate::builder::{build_mapping, MappingTable};
use crate::error::{Error, Result};
use crate::loader::load_records;
use crate::sources::{SourceSpec, REVISIONS};
use serde::{Deserialize, Serialize};

/// Converts legacy HKSCS codepoints to their current Unicode form
///
/// All mapping tables are built once at construction and never mutated, so a
/// shared `&Converter` can serve any number of threads without
/// synchronization.
#[derive(Debug)]
pub struct Converter {
    tables: Vec<(&'static str, MappingTable)>,
}

/// One matching stage of a resolution walk, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionStep {
    /// Revision whose table matched
    pub revision: String,
    /// Key that matched in that table
    pub matched: String,
    /// Replacement codepoints the table produced
    pub replacement: Vec<String>,
}

impl Converter {
    /// Build the full revision chain from the shipped source tables
    pub fn new() -> Result<Self> {
        Self::from_specs(REVISIONS)
    }

    /// Build a chain from explicit source specs, oldest first
    pub fn from_specs(specs: &[SourceSpec]) -> Result<Self> {
        let mut tables = Vec::with_capacity(specs.len());
        for spec in specs {
            let records = load_records(spec)?;
            let table = build_mapping(&records, spec.from_columns, spec.to_column);
            tables.push((spec.name, table));
        }
        Ok(Self { tables })
    }

    /// Revision names and table sizes, in chain order
    pub fn table_sizes(&self) -> Vec<(&'static str, usize)> {
        self.tables.iter().map(|(name, t)| (*name, t.len())).collect()
    }

    /// Convert a single character
    ///
    /// The argument must be exactly one Unicode scalar value; anything else
    /// is [`Error::InvalidArity`]. In particular a multi-codepoint grapheme
    /// cluster (a flag emoji, a skin-tone-modified emoji) must be
    /// pre-segmented by the caller — use [`Converter::convert_string`] when
    /// the input is arbitrary text.
    ///
    /// Returns one character for plain remaps, two for the composed
    /// diacritic sequences, and the input unchanged when no revision remaps
    /// it.
    pub fn convert_char(&self, input: &str) -> Result<String> {
        let mut chars = input.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(Error::InvalidArity {
                    count: input.chars().count(),
                })
            }
        };
        Ok(self.convert_scalar(c))
    }

    /// Convert every codepoint of a string independently
    ///
    /// Purely per-codepoint: no lookahead, no arity check. Multi-codepoint
    /// grapheme clusters pass through one scalar at a time, each either
    /// remapped or kept.
    pub fn convert_string(&self, input: &str) -> String {
        input.chars().map(|c| self.convert_scalar(c)).collect()
    }

    /// Trace the chain walk for one character: one step per matching table
    pub fn explain(&self, c: char) -> Vec<ResolutionStep> {
        let key = codepoint_key(c);
        let mut steps = Vec::new();

        let mut current = key;
        for (name, table) in &self.tables {
            if let Some(value) = table.get(&current) {
                steps.push(ResolutionStep {
                    revision: (*name).to_string(),
                    matched: current.clone(),
                    replacement: value.clone(),
                });
                if value.len() > 1 {
                    break;
                }
                current = value[0].clone();
            }
        }

        steps
    }

    /// The chain walk for one scalar value
    ///
    /// Walks the tables oldest to newest, substituting at every match. A
    /// codepoint can be remapped more than once along the way, e.g. EC77
    /// (GCCS) -> 4CA4 (HKSCS-1999) -> 9FD0 (HKSCS-2016). A composed
    /// sequence (length > 1) is terminal: it is never looked up again in a
    /// later table.
    fn convert_scalar(&self, c: char) -> String {
        let key = codepoint_key(c);

        let mut current = &key;
        let mut composed: Option<&[String]> = None;
        for (_, table) in &self.tables {
            if let Some(value) = table.get(current) {
                if value.len() > 1 {
                    composed = Some(value.as_slice());
                    break;
                }
                current = &value[0];
            }
        }

        if let Some(sequence) = composed {
            return render_composed(sequence).unwrap_or_else(|| c.to_string());
        }

        if *current == key {
            // No table matched, or the chain led back to the input
            return c.to_string();
        }

        render_single(current).unwrap_or_else(|| c.to_string())
    }
}

/// Codepoint key for a scalar: uppercase hex, no prefix, no padding
pub fn codepoint_key(c: char) -> String {
    format!("{:X}", c as u32)
}

/// Parse one stored codepoint; None for non-hex or non-scalar values
fn parse_codepoint(value: &str) -> Option<char> {
    u32::from_str_radix(value, 16).ok().and_then(char::from_u32)
}

/// Render a composed sequence; None if any element fails to parse
fn render_composed(sequence: &[String]) -> Option<String> {
    sequence.iter().map(|v| parse_codepoint(v)).collect()
}

/// Render a single resolved value
///
/// Tables store either a hex codepoint ("39FB") or a literal character (the
/// HKSCS-2016 source ships characters, not numbers). Try hex first; a value
/// that is not hex but is exactly one character is taken literally. Anything
/// else is unrenderable and the caller falls back to the original input.
fn render_single(value: &str) -> Option<String> {
    if let Some(c) = parse_codepoint(value) {
        return Some(c.to_string());
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_string()),
        _ => None,
    }
}
