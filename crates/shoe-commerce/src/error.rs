//! Catalog error types.

use thiserror::Error;

/// Errors raised while turning raw listing data into catalog values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Slug is empty or whitespace.
    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    /// A price field holds a negative amount.
    #[error("Negative amount for {field} on {slug}: {amount}")]
    NegativeAmount {
        slug: String,
        field: &'static str,
        amount: i64,
    },

    /// Release date could not be parsed.
    #[error("Invalid release date: {0}")]
    InvalidReleaseDate(String),

    /// Currency code is not supported.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
