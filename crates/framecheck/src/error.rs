//! Error types for the framecheck library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for framecheck operations.
///
/// Data-quality findings are never errors; they are reported as
/// [`ValidationWarning`](crate::validation::ValidationWarning)s. This type
/// covers misconfiguration and I/O only.
#[derive(Debug, Error)]
pub enum FramecheckError {
    /// The schema could not be constructed from the given columns or flags.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// A caller-supplied argument does not fit the schema.
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid delimiter specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Empty file or no data to validate.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for framecheck operations.
pub type Result<T> = std::result::Result<T, FramecheckError>;
