//! hkscs-core: Convert legacy HKSCS codepoints to current Unicode
//!
//! This library provides functionality to:
//! - Parse the shipped HKSCS revision tables (TSV and JSON) into row records
//! - Build one mapping table per revision, oldest (GCCS) to newest (HKSCS-2016)
//! - Resolve a character through the revision chain, including multi-hop
//!   remaps and the composed diacritic sequences
//!
//! ```
//! use hkscs_core::Converter;
//!
//! let converter = Converter::new().unwrap();
//! assert_eq!(converter.convert_string("\u{ECD1}"), "\u{5605}");
//! ```

pub mod builder;
pub mod converter;
pub mod error;
pub mod loader;
pub mod sources;

pub use builder::{build_mapping, MappingTable};
pub use converter::{codepoint_key, Converter, ResolutionStep};
pub use error::{Error, Result};
pub use loader::{load_records, parse_json, parse_tsv, Record};
pub use sources::{SourceFormat, SourceSpec, REVISIONS};
