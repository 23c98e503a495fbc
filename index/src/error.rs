//! Error types for the TODO index.

use thiserror::Error;

/// Result type alias for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Errors that can occur in the TODO index.
///
/// None of these are fatal to the host: a document whose content cannot be
/// read simply contributes no group, and the error is surfaced to the
/// caller.
#[derive(Error, Debug)]
pub enum IndexError {
    /// Document not found in storage.
    #[error("document not found: {0}")]
    NotFound(String),

    /// Document content could not be read from storage.
    #[error("failed to read document {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
