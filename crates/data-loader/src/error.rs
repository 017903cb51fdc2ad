//! Error types for the data-loader crate.
//!
//! Every problem with catalog data is reported here, at load time, so the
//! matching code in `pipeline` can assume well-formed input.

use thiserror::Error;

/// Errors that can occur while loading and validating a catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A JSON document couldn't be parsed into the expected shape
    ///
    /// `line` comes from serde_json and is 0 when the error is not tied
    /// to a position (e.g. unexpected end of input).
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
