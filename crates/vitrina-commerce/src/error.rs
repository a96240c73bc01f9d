//! Commerce error types.

use thiserror::Error;

/// Errors that can occur while reading catalog data.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Identifier could not be parsed.
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
