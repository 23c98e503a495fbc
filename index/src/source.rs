//! Collaborator seams for document content.
//!
//! The index never touches the file system directly; it goes through a
//! `ContentSource` for cold reads and a `LiveContentProvider` for unsaved
//! editing-surface content.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::error::{IndexError, Result};

/// Durable ("cold") document storage.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Read the stored content of `path`.
    async fn read(&self, path: &str) -> Result<String>;
}

/// Live editing surfaces owned by the host.
pub trait LiveContentProvider: Send + Sync {
    /// Current unsaved content for `path` if an editing surface showing it
    /// is open, else `None`.
    fn open_content(&self, path: &str) -> Option<String>;
}

/// A `ContentSource` over the file system, rooted at a vault directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`; document paths are resolved
    /// relative to it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ContentSource for FileStore {
    async fn read(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        fs::read_to_string(&full).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                IndexError::NotFound(path.to_string())
            } else {
                IndexError::Read {
                    path: path.to_string(),
                    source,
                }
            }
        })
    }
}

/// Provider for hosts without an editing surface; never reports content.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLiveContent;

impl LiveContentProvider for NoLiveContent {
    fn open_content(&self, _path: &str) -> Option<String> {
        None
    }
}
