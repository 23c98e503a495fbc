//! The incremental TODO index.
//!
//! Maps document paths to their extracted TODO groups and keeps the mapping
//! synchronized with document lifecycle events. Extraction is synchronous
//! CPU work; only content fetches await.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use todovault_extract::{PlaintextNormalizer, TodoExtractor};

use crate::document::DocumentRef;
use crate::error::{IndexError, Result};
use crate::event::{DocumentEvent, DocumentEventKind, IndexChange};
use crate::group::TodoGroup;
use crate::source::{ContentSource, LiveContentProvider};

/// Process-wide mapping from document path to its TODO group.
///
/// One value of this type is constructed when the host loads and torn down
/// when it shuts; it is handed by reference to whatever dispatches
/// lifecycle notifications, never kept as an ambient singleton. All
/// operations touch only the keys they name, so concurrent updates to
/// different documents never contend beyond the map guard.
pub struct TodoIndex {
    /// Groups by document path.
    groups: Arc<RwLock<HashMap<String, TodoGroup>>>,

    /// The extraction core.
    extractor: Arc<TodoExtractor>,

    /// Plaintext reduction of the vault's markup dialect.
    normalizer: Arc<dyn PlaintextNormalizer + Send + Sync>,

    /// Cold storage reads.
    storage: Arc<dyn ContentSource>,

    /// Unsaved editing-surface content.
    live: Arc<dyn LiveContentProvider>,
}

impl TodoIndex {
    /// Create a new, empty index over the given collaborators.
    pub fn new(
        extractor: TodoExtractor,
        normalizer: Arc<dyn PlaintextNormalizer + Send + Sync>,
        storage: Arc<dyn ContentSource>,
        live: Arc<dyn LiveContentProvider>,
    ) -> Self {
        Self {
            groups: Arc::new(RwLock::new(HashMap::new())),
            extractor: Arc::new(extractor),
            normalizer,
            storage,
            live,
        }
    }

    /// Bulk-load every listed document from cold storage, concurrently.
    ///
    /// One task is spawned per document and all are joined; a failed read
    /// never aborts the siblings, it is logged and reported in the returned
    /// [`LoadReport`] while the document stays absent from the index.
    pub async fn load_all(&self, docs: Vec<DocumentRef>) -> LoadReport {
        let start = Instant::now();
        let mut report = LoadReport::default();
        let mut handles = Vec::with_capacity(docs.len());

        for doc in docs {
            if !doc.is_scannable() {
                report.skipped += 1;
                continue;
            }

            let storage = Arc::clone(&self.storage);
            let extractor = Arc::clone(&self.extractor);
            let normalizer = Arc::clone(&self.normalizer);
            let groups = Arc::clone(&self.groups);

            handles.push(tokio::spawn(async move {
                match storage.read(&doc.path).await {
                    Ok(text) => {
                        let items = extractor.extract(&text, normalizer.as_ref());
                        let path = doc.path.clone();
                        match TodoGroup::non_empty(doc, items) {
                            Some(group) => {
                                groups.write().await.insert(path, group);
                                LoadOutcome::Indexed
                            }
                            None => {
                                groups.write().await.remove(&path);
                                LoadOutcome::Empty
                            }
                        }
                    }
                    Err(err) => {
                        warn!("failed to load {}: {err}", doc.path);
                        groups.write().await.remove(&doc.path);
                        LoadOutcome::Failed(doc.path, err)
                    }
                }
            }));
        }

        for joined in futures::future::join_all(handles).await {
            match joined {
                Ok(LoadOutcome::Indexed) => report.indexed += 1,
                Ok(LoadOutcome::Empty) => report.empty += 1,
                Ok(LoadOutcome::Failed(path, err)) => report.failures.push((path, err)),
                Err(err) => warn!("load task aborted: {err}"),
            }
        }

        info!(
            "loaded TODO index in {:?} (indexed: {}, empty: {}, skipped: {}, failed: {})",
            start.elapsed(),
            report.indexed,
            report.empty,
            report.skipped,
            report.failures.len()
        );

        report
    }

    /// Re-derive the entry for `doc`, preferring live (unsaved) content
    /// over a cold read.
    ///
    /// Safe to call repeatedly for the same document; the most recently
    /// completed call reflects the freshest content it read. A read failure
    /// leaves the document absent and is returned to the caller.
    pub async fn upsert(&self, doc: DocumentRef) -> Result<IndexChange> {
        if !doc.is_scannable() {
            return Ok(self.remove(&doc.path).await);
        }

        let text = match self.live.open_content(&doc.path) {
            Some(live) if !live.is_empty() => live,
            _ => match self.storage.read(&doc.path).await {
                Ok(text) => text,
                Err(err) => {
                    self.groups.write().await.remove(&doc.path);
                    warn!("failed to read {}: {err}", doc.path);
                    return Err(err);
                }
            },
        };

        let items = self.extractor.extract(&text, self.normalizer.as_ref());
        let path = doc.path.clone();

        let change = match TodoGroup::non_empty(doc, items) {
            Some(group) => {
                self.groups
                    .write()
                    .await
                    .insert(path.clone(), group.clone());
                debug!("updated entry: {path} ({} items)", group.items.len());
                IndexChange::Updated { group }
            }
            None => {
                self.groups.write().await.remove(&path);
                debug!("entry now empty, removed: {path}");
                IndexChange::Removed { path }
            }
        };

        Ok(change)
    }

    /// Delete the entry for `path` unconditionally. Absent entries are a
    /// no-op.
    pub async fn remove(&self, path: &str) -> IndexChange {
        if self.groups.write().await.remove(path).is_some() {
            debug!("removed entry: {path}");
        }
        IndexChange::Removed {
            path: path.to_string(),
        }
    }

    /// Apply a rename: drop the entry under `old_path`, then upsert the
    /// document under its new path. Both steps are reflected in the
    /// returned changes.
    pub async fn rename(&self, old_path: &str, doc: DocumentRef) -> Vec<IndexChange> {
        let removed = self.remove(old_path).await;
        let new_path = doc.path.clone();

        let second = match self.upsert(doc).await {
            Ok(change) => change,
            Err(err) => {
                warn!("rename target unreadable, {new_path} stays absent: {err}");
                IndexChange::Removed { path: new_path }
            }
        };

        vec![removed, second]
    }

    /// Handle a host lifecycle event.
    ///
    /// Never fatal: a failure degrades to the document contributing
    /// nothing, and events for untracked or unscannable paths are no-ops.
    pub async fn handle_event(&self, event: DocumentEvent) -> Vec<IndexChange> {
        match event.kind {
            DocumentEventKind::Created | DocumentEventKind::Modified => {
                let path = event.doc.path.clone();
                match self.upsert(event.doc).await {
                    Ok(change) => vec![change],
                    Err(err) => {
                        warn!("update failed for {path}: {err}");
                        vec![IndexChange::Removed { path }]
                    }
                }
            }
            DocumentEventKind::Deleted => vec![self.remove(&event.doc.path).await],
            DocumentEventKind::Renamed { old_path } => self.rename(&old_path, event.doc).await,
        }
    }

    /// All present groups, ordered by ascending display name. Read-only;
    /// never triggers extraction.
    pub async fn enumerate(&self) -> Vec<TodoGroup> {
        let groups = self.groups.read().await;
        let mut all: Vec<TodoGroup> = groups.values().cloned().collect();
        all.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        all
    }

    /// The group for a single path, if present.
    pub async fn lookup(&self, path: &str) -> Option<TodoGroup> {
        self.groups.read().await.get(path).cloned()
    }

    /// Number of documents currently holding TODOs.
    pub async fn len(&self) -> usize {
        self.groups.read().await.len()
    }

    /// Whether the index holds no groups at all.
    pub async fn is_empty(&self) -> bool {
        self.groups.read().await.is_empty()
    }
}

/// Per-document outcome of a load task.
enum LoadOutcome {
    Indexed,
    Empty,
    Failed(String, IndexError),
}

/// Summary of a bulk load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Documents that produced a group.
    pub indexed: usize,

    /// Documents scanned that hold no TODOs.
    pub empty: usize,

    /// Documents skipped by the type filter.
    pub skipped: usize,

    /// Per-document read failures; these documents are absent from the
    /// index.
    pub failures: Vec<(String, IndexError)>,
}
