//! In-memory version store.
//!
//! Histories live in a `DashMap` keyed by document id, each behind its
//! own `tokio::sync::RwLock`. The write lock is the per-document
//! serialization primitive: appends for one document are totally
//! ordered, appends for different documents do not contend, and readers
//! only ever see committed entries.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::RwLock;
use tracing::info;

use drafthub_core::config::history::HistoryConfig;
use drafthub_core::error::AppError;
use drafthub_core::result::AppResult;
use drafthub_core::types::id::{DocumentId, VersionId};
use drafthub_core::types::pagination::{CursorPage, CursorRequest};
use drafthub_entity::document::FileVersion;

/// One document's append-only history, ascending by timestamp.
#[derive(Debug, Default)]
struct DocumentHistory {
    versions: Vec<FileVersion>,
}

impl DocumentHistory {
    fn position(&self, version_id: VersionId) -> Option<usize> {
        self.versions.iter().position(|v| v.id == version_id)
    }
}

/// In-memory [`VersionStore`] provider.
///
/// [`VersionStore`]: crate::store::VersionStore
#[derive(Debug, Clone)]
pub struct MemoryVersionStore {
    documents: Arc<DashMap<DocumentId, Arc<RwLock<DocumentHistory>>>>,
    max_page_size: usize,
}

impl MemoryVersionStore {
    /// Create an empty store with limits from configuration.
    pub fn new(config: &HistoryConfig) -> Self {
        Self {
            documents: Arc::new(DashMap::new()),
            max_page_size: config.max_page_size,
        }
    }

    /// The history lock for a document, creating an empty history on
    /// first write access.
    fn history_entry(&self, document_id: DocumentId) -> Arc<RwLock<DocumentHistory>> {
        self.documents
            .entry(document_id)
            .or_default()
            .value()
            .clone()
    }

    /// The history lock for a document, without creating one.
    fn history(&self, document_id: DocumentId) -> Option<Arc<RwLock<DocumentHistory>>> {
        self.documents.get(&document_id).map(|e| e.value().clone())
    }
}

#[async_trait]
impl crate::store::VersionStore for MemoryVersionStore {
    async fn create_version(
        &self,
        document_id: DocumentId,
        content: String,
        author: String,
        message: Option<String>,
    ) -> AppResult<FileVersion> {
        // Clone the Arc out of the map before locking so the map shard
        // is not held across the await.
        let history = self.history_entry(document_id);
        let mut history = history.write().await;

        // Strictly increasing at millisecond granularity even when the
        // wall clock stalls within one millisecond.
        let now_ms = Utc::now().timestamp_millis();
        let ts_ms = match history.versions.last() {
            Some(head) => now_ms.max(head.timestamp.timestamp_millis() + 1),
            None => now_ms,
        };
        let timestamp = DateTime::from_timestamp_millis(ts_ms)
            .ok_or_else(|| AppError::internal("Timestamp out of range"))?;

        let version = FileVersion {
            id: VersionId::new(),
            document_id,
            content,
            timestamp,
            author,
            message,
        };
        history.versions.push(version.clone());

        info!(
            document_id = %document_id,
            version_id = %version.id,
            author = %version.author,
            "Version created"
        );

        Ok(version)
    }

    async fn get_version(
        &self,
        document_id: DocumentId,
        version_id: VersionId,
    ) -> AppResult<Option<FileVersion>> {
        let Some(history) = self.history(document_id) else {
            return Ok(None);
        };
        let history = history.read().await;
        Ok(history
            .position(version_id)
            .map(|i| history.versions[i].clone()))
    }

    async fn latest_version(&self, document_id: DocumentId) -> AppResult<Option<FileVersion>> {
        let Some(history) = self.history(document_id) else {
            return Ok(None);
        };
        let history = history.read().await;
        Ok(history.versions.last().cloned())
    }

    async fn list_versions(
        &self,
        document_id: DocumentId,
        page: &CursorRequest,
    ) -> AppResult<CursorPage<FileVersion>> {
        let history = self
            .history(document_id)
            .ok_or_else(|| AppError::not_found(format!("Unknown document {document_id}")))?;
        let history = history.read().await;
        if history.versions.is_empty() {
            return Err(AppError::not_found(format!("Unknown document {document_id}")));
        }

        // Versions are stored ascending; listings read them descending.
        // Timestamps cannot tie by construction, so append order is also
        // (timestamp, id)-descending order when reversed.
        let start = match page.cursor {
            Some(cursor) => history
                .position(cursor)
                .ok_or_else(|| AppError::validation(format!("Unknown cursor {cursor}")))?,
            None => history.versions.len(),
        };

        let limit = page.effective_limit(self.max_page_size);
        let items: Vec<FileVersion> = history.versions[..start]
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect();

        let consumed = items.len();
        let next_cursor = if start > consumed {
            items.last().map(|v| v.id)
        } else {
            None
        };

        Ok(CursorPage::new(items, next_cursor))
    }
}
