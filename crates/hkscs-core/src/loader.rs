//! Loaders that turn raw source tables into uniform row records
//!
//! Each historical revision ships as either tab-separated text with a header
//! row or a JSON array of flat objects. Both shapes are reduced to the same
//! representation: an ordered list of records, each a map from column name
//! to raw cell string. No cell validation happens here; that belongs to the
//! mapping builder.

use crate::error::{Error, Result};
use crate::sources::{SourceFormat, SourceSpec};
use serde_json::Value;
use std::collections::BTreeMap;

/// One row of a source table: column name -> raw cell string
pub type Record = BTreeMap<String, String>;

/// Load the records for a single revision source, dispatching on its format
pub fn load_records(spec: &SourceSpec) -> Result<Vec<Record>> {
    match spec.format {
        SourceFormat::Tsv => parse_tsv(spec.name, spec.data),
        SourceFormat::Json => parse_json(spec.name, spec.data),
    }
}

/// Parse tab-separated content with a header row into records
///
/// Rows shorter than the header simply lack the trailing columns; rows
/// longer than the header have their surplus cells dropped.
pub fn parse_tsv(source_name: &str, content: &str) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true) // Allow varying number of fields
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::Tsv {
            source_name: source_name.to_string(),
            source: e,
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| Error::Tsv {
            source_name: source_name.to_string(),
            source: e,
        })?;

        let mut record = Record::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            record.insert(header.clone(), cell.to_string());
        }
        records.push(record);
    }

    Ok(records)
}

/// Parse a JSON array of flat objects into records
///
/// Non-string scalar values are stringified via their display form so that
/// the builder sees the same shape regardless of source format.
pub fn parse_json(source_name: &str, content: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(content)?;

    let rows = value.as_array().ok_or_else(|| Error::JsonShape {
        source_name: source_name.to_string(),
        message: "top-level value is not an array".to_string(),
    })?;

    let mut records = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let object = row.as_object().ok_or_else(|| Error::JsonShape {
            source_name: source_name.to_string(),
            message: format!("row {} is not an object", index),
        })?;

        let mut record = Record::new();
        for (key, cell) in object {
            let cell = match cell {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            record.insert(key.clone(), cell);
        }
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tsv_simple() {
        let tsv = "From\tTo\nE000\t4E00\nE001\t4E01\n";
        let records = parse_tsv("test", tsv).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["From"], "E000");
        assert_eq!(records[0]["To"], "4E00");
        assert_eq!(records[1]["From"], "E001");
    }

    #[test]
    fn test_parse_tsv_short_row() {
        let tsv = "A\tB\tC\n1\t2\n";
        let records = parse_tsv("test", tsv).unwrap();

        // Missing trailing column is absent, not an error
        assert_eq!(records[0].get("A").map(String::as_str), Some("1"));
        assert_eq!(records[0].get("B").map(String::as_str), Some("2"));
        assert_eq!(records[0].get("C"), None);
    }

    #[test]
    fn test_parse_tsv_long_row() {
        let tsv = "A\tB\n1\t2\t3\t4\n";
        let records = parse_tsv("test", tsv).unwrap();

        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0]["B"], "2");
    }

    #[test]
    fn test_parse_tsv_empty_cells() {
        let tsv = "A\tB\tC\n\tx\t\n";
        let records = parse_tsv("test", tsv).unwrap();

        assert_eq!(records[0]["A"], "");
        assert_eq!(records[0]["B"], "x");
        assert_eq!(records[0]["C"], "");
    }

    #[test]
    fn test_parse_json_objects() {
        let json = r#"[{"codepoint": "4CA4", "char": "X"}, {"codepoint": "3588", "char": "Y"}]"#;
        let records = parse_json("test", json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["codepoint"], "4CA4");
        assert_eq!(records[1]["char"], "Y");
    }

    #[test]
    fn test_parse_json_not_array() {
        let json = r#"{"codepoint": "4CA4"}"#;
        let err = parse_json("test", json).unwrap_err();
        assert!(matches!(err, Error::JsonShape { .. }));
    }

    #[test]
    fn test_parse_json_row_not_object() {
        let json = r#"[["4CA4", "X"]]"#;
        let err = parse_json("test", json).unwrap_err();
        assert!(matches!(err, Error::JsonShape { .. }));
    }
}
