//! Error types for TODO extraction.

use thiserror::Error;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while building the extractor.
///
/// Extraction itself is infallible; only constructing the rule set can
/// fail, and only if a rule pattern is malformed.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A recognition rule pattern failed to compile.
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex_lite::Error),
}
