//! Remote data error types.

use thiserror::Error;

/// Errors that can occur when reading from the remote data service.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The service answered with a non-success status.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// The request never got a response.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The response body didn't match the expected shape.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// The request could not be built.
    #[error("Request error: {0}")]
    Request(String),

    /// The source has no data for this resource.
    #[error("Not available: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Deserialization(e.to_string())
    }
}

/// Result type for remote reads.
pub type Result<T> = std::result::Result<T, FetchError>;
