//! Application-wide error types.

use thiserror::Error;

/// Message returned to clients for every server-side failure.
pub const GENERIC_INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Client sent a payload that could not be read at all.
    #[error("Malformed input: {message} ({details})")]
    MalformedInput {
        /// Client-facing summary.
        message: String,
        /// Parser detail.
        details: String,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) | Self::MalformedInput { .. } => 400,
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for logs and API clients.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::MalformedInput { .. } => "MALFORMED_INPUT",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the message that may be shown to a client.
    ///
    /// Server-side failures never leak their cause.
    #[must_use]
    pub fn public_message(&self) -> &str {
        match self {
            Self::NotFound(msg) | Self::Validation(msg) => msg,
            Self::MalformedInput { message, .. } => message,
            Self::Database(_) => GENERIC_INTERNAL_MESSAGE,
        }
    }

    /// Returns extra detail for client errors that carry one.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::MalformedInput { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Returns true for errors caused by the server rather than the request.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
