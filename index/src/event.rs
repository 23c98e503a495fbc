//! Document lifecycle events and index change notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::DocumentRef;
use crate::group::TodoGroup;

/// A document lifecycle event delivered by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentEvent {
    /// The kind of event.
    pub kind: DocumentEventKind,

    /// The affected document, under its current path.
    pub doc: DocumentRef,

    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
}

impl DocumentEvent {
    /// Create a new event stamped with the current time.
    pub fn new(kind: DocumentEventKind, doc: DocumentRef) -> Self {
        Self {
            kind,
            doc,
            timestamp: Utc::now(),
        }
    }
}

/// Kind of document event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentEventKind {
    /// Document was created.
    Created,

    /// Document content changed.
    Modified,

    /// Document was deleted.
    Deleted,

    /// Document moved from `old_path` to its current path.
    Renamed { old_path: String },
}

/// What changed in the index after an update.
///
/// Every mutating operation reports the affected key so a presentation
/// layer can insert, replace, or drop a single row instead of redrawing
/// everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IndexChange {
    /// The entry for this path was inserted or replaced.
    Updated { group: TodoGroup },

    /// The entry for this path is gone (or was never present).
    Removed { path: String },
}

impl IndexChange {
    /// The affected index key.
    pub fn path(&self) -> &str {
        match self {
            Self::Updated { group } => &group.doc.path,
            Self::Removed { path } => path,
        }
    }
}
