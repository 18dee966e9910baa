//! # Storage Errors
//!
//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage errors
///
/// Every variant surfaces to HTTP callers as a plain 500; the detail only
/// ever reaches the log.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Data file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Collection contents could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A writer panicked while holding the collection lock
    #[error("Lock poisoned")]
    LockPoisoned,
}
