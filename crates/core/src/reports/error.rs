//! Report error types.

use thiserror::Error;

/// Errors that can occur while assembling a report row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// An aggregated row lacked a column the report needs.
    #[error("Malformed report row: missing {0}")]
    MissingColumn(&'static str),
}
