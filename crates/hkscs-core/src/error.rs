//! Error types for hkscs-core

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in hkscs-core
#[derive(Debug, Error)]
pub enum Error {
    /// The single-character conversion was given something other than
    /// exactly one Unicode scalar value
    #[error("expected exactly one codepoint, got {count}")]
    InvalidArity { count: usize },

    /// TSV parsing error from the csv crate
    #[error("TSV error in source '{source_name}': {source}")]
    Tsv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// A JSON source did not contain an array of flat objects
    #[error("malformed JSON source '{source_name}': {message}")]
    JsonShape {
        source_name: String,
        message: String,
    },

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
