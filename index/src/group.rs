//! TODO groups: the extracted items for one document.

use serde::{Deserialize, Serialize};

use crate::document::DocumentRef;

/// The TODO items extracted from one document, in discovery order.
///
/// A group only exists when it holds at least one item; absence represents
/// "no TODOs".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoGroup {
    /// The source document.
    pub doc: DocumentRef,

    /// Extracted items, trimmed and never empty, in the order they were
    /// discovered scanning top-to-bottom.
    pub items: Vec<String>,
}

impl TodoGroup {
    /// Build a group from extracted items, or `None` when there are none.
    pub fn non_empty(doc: DocumentRef, items: Vec<String>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { doc, items })
        }
    }

    /// Sort key for enumeration: display name first, path as tie-break so
    /// the order is total over distinct keys.
    pub fn sort_key(&self) -> (&str, &str) {
        (&self.doc.name, &self.doc.path)
    }
}
