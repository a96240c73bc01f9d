//! Shopping list error types.

use thiserror::Error;

/// Errors raised by list storage backends.
///
/// The store itself never returns these to callers; it logs them and keeps
/// working in memory.
#[derive(Error, Debug)]
pub enum ListError {
    /// Failed to open the backing store.
    #[error("Failed to open storage: {0}")]
    OpenError(String),

    /// Filesystem failure in the file backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific read/write failure.
    #[error("Storage operation failed: {0}")]
    StoreError(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, ListError>;
