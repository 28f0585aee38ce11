//! Error types for core operations.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core types.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// A date could not be constructed or parsed.
    #[error("Invalid date: {input}")]
    InvalidDate {
        /// The offending input.
        input: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }
}
