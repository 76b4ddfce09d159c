//! Rollback — restore a historical version by appending a new one.
//!
//! Rollback never rewrites history: the target version's content is
//! re-read from the store (caller-supplied content is never trusted) and
//! appended as a new head version. A concurrent editor's save can
//! therefore never be lost; at worst the histories interleave.

use tracing::warn;

use drafthub_core::error::{AppError, ErrorKind};
use drafthub_core::result::AppResult;
use drafthub_core::types::id::{DocumentId, VersionId};
use drafthub_entity::document::FileVersion;

use crate::history::service::HistoryService;

/// Restores historical versions.
#[derive(Clone)]
pub struct RollbackService {
    /// History read/write facade.
    history: HistoryService,
}

impl RollbackService {
    /// Creates a new rollback service.
    pub fn new(history: HistoryService) -> Self {
        Self { history }
    }

    /// Rolls a document back to `target_version_id`.
    ///
    /// Returns the new head version whose content equals the target's.
    /// Retries a bounded number of times when the store reports a write
    /// conflict; the auto message always reflects the target as read at
    /// call time.
    pub async fn rollback(
        &self,
        document_id: DocumentId,
        target_version_id: VersionId,
        author: String,
    ) -> AppResult<FileVersion> {
        let target = self.history.get_version(document_id, target_version_id).await?;
        let message = format!(
            "Rolled back to version {} created at {}",
            target.id,
            target.timestamp.to_rfc3339()
        );

        let attempts = self.history.config().rollback_retry_attempts.max(1);
        let mut last_err: Option<AppError> = None;
        for attempt in 1..=attempts {
            match self
                .history
                .store()
                .create_version(
                    document_id,
                    target.content.clone(),
                    author.clone(),
                    Some(message.clone()),
                )
                .await
            {
                Ok(version) => {
                    self.history
                        .notify_rollback(document_id, version.id, target.id, author)
                        .await;
                    return Ok(version);
                }
                Err(err) if err.kind == ErrorKind::Conflict => {
                    warn!(
                        document_id = %document_id,
                        attempt,
                        "Rollback write conflict, retrying"
                    );
                    last_err = Some(err);
                }
                Err(err) => return Err(err),
            }
        }
        Err(last_err.unwrap_or_else(|| AppError::conflict("Rollback retries exhausted")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use drafthub_core::config::history::HistoryConfig;
    use drafthub_core::traits::notifier::NullNotifier;
    use drafthub_core::types::pagination::CursorRequest;
    use drafthub_store::MemoryVersionStore;

    fn make_services() -> (HistoryService, RollbackService) {
        let config = HistoryConfig::default();
        let history = HistoryService::new(
            Arc::new(MemoryVersionStore::new(&config)),
            Arc::new(NullNotifier),
            config,
        );
        let rollback = RollbackService::new(history.clone());
        (history, rollback)
    }

    #[tokio::test]
    async fn test_rollback_appends_new_head() {
        let (history, rollback) = make_services();
        let document_id = DocumentId::new();
        let v1 = history
            .create_version(document_id, "original".to_string(), "alice".to_string(), None)
            .await
            .unwrap();
        history
            .create_version(document_id, "edited".to_string(), "bob".to_string(), None)
            .await
            .unwrap();

        let restored = rollback
            .rollback(document_id, v1.id, "carol".to_string())
            .await
            .unwrap();

        assert_ne!(restored.id, v1.id, "rollback must create a new version");
        assert_eq!(restored.content, "original");
        assert_eq!(restored.author, "carol");

        // History grew; nothing was removed.
        let page = history
            .list_versions(document_id, &CursorRequest::first_page(10))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[0].id, restored.id);
    }

    #[tokio::test]
    async fn test_auto_message_references_target() {
        let (history, rollback) = make_services();
        let document_id = DocumentId::new();
        let v1 = history
            .create_version(document_id, "original".to_string(), "alice".to_string(), None)
            .await
            .unwrap();
        history
            .create_version(document_id, "edited".to_string(), "alice".to_string(), None)
            .await
            .unwrap();

        let restored = rollback
            .rollback(document_id, v1.id, "alice".to_string())
            .await
            .unwrap();
        let message = restored.message.expect("auto message present");
        assert!(message.contains(&v1.id.to_string()));
        assert!(message.contains(&v1.timestamp.to_rfc3339()));
    }

    #[tokio::test]
    async fn test_rollback_unknown_target_is_not_found() {
        let (history, rollback) = make_services();
        let document_id = DocumentId::new();
        history
            .create_version(document_id, "a".to_string(), "alice".to_string(), None)
            .await
            .unwrap();

        let err = rollback
            .rollback(document_id, VersionId::new(), "alice".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_rollback_target_from_other_document_is_not_found() {
        let (history, rollback) = make_services();
        let doc_a = DocumentId::new();
        let doc_b = DocumentId::new();
        let foreign = history
            .create_version(doc_a, "a".to_string(), "alice".to_string(), None)
            .await
            .unwrap();
        history
            .create_version(doc_b, "b".to_string(), "alice".to_string(), None)
            .await
            .unwrap();

        let err = rollback
            .rollback(doc_b, foreign.id, "alice".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
