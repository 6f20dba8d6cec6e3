//! Error type for request loading and parsing

use thiserror::Error;

/// Errors from reading scenario requests
///
/// The simulator itself is infallible; only the file and parsing surface fails.
#[derive(Debug, Error)]
pub enum PayoffError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

impl PayoffError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        PayoffError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PayoffError>;
