//! # TODO Index
//!
//! This crate maintains the incrementally updated, sorted index of TODO
//! annotations grouped by source document. The host feeds it document
//! lifecycle events; it fetches content through collaborator seams, runs
//! the extraction core, and exposes the mapping to a presentation layer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         TODO Index                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  DocumentEvent ──► TodoIndex ──► IndexChange                    │
//! │                        │                                        │
//! │        ContentSource ◄─┼─► LiveContentProvider                  │
//! │                        ▼                                        │
//! │                  TodoExtractor (todovault-extract)              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod document;
pub mod error;
pub mod event;
pub mod group;
pub mod index;
pub mod source;

pub use document::DocumentRef;
pub use error::{IndexError, Result};
pub use event::{DocumentEvent, DocumentEventKind, IndexChange};
pub use group::TodoGroup;
pub use index::{LoadReport, TodoIndex};
pub use source::{ContentSource, FileStore, LiveContentProvider, NoLiveContent};
