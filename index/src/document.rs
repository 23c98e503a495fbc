//! Document identity and type filtering.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Extensions of documents that are scanned for TODOs. Anything else is
/// filtered out before its content is ever read.
const SCANNABLE_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// A reference to a document in the vault.
///
/// The path is the unique index key; the display name (base name without
/// extension) only drives enumeration order and presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Path of the document, unique within the index.
    pub path: String,

    /// Display name derived from the path.
    pub name: String,
}

impl DocumentRef {
    /// Create a document reference, deriving the display name.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = display_name(&path);
        Self { path, name }
    }

    /// Whether this document is eligible for scanning.
    pub fn is_scannable(&self) -> bool {
        Path::new(&self.path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                SCANNABLE_EXTENSIONS
                    .iter()
                    .any(|s| ext.eq_ignore_ascii_case(s))
            })
    }
}

/// Base name of the path without its extension.
fn display_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map_or_else(|| path.to_string(), str::to_string)
}
