//! Import error types.

use thiserror::Error;

/// Batch-level import failures, raised before any row is processed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    /// The multipart body had no `file` part.
    #[error("No file uploaded")]
    MissingFile,

    /// The file could not be read as CSV.
    #[error("Could not read CSV file")]
    Unreadable(String),

    /// Header only, or nothing at all.
    #[error("CSV file is empty or contains no data rows")]
    Empty,
}
