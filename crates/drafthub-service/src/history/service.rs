//! Version history service — create, list, and fetch versions.

use std::sync::Arc;

use tracing::info;

use drafthub_core::config::history::HistoryConfig;
use drafthub_core::error::AppError;
use drafthub_core::events::{DocumentEvent, DomainEvent};
use drafthub_core::result::AppResult;
use drafthub_core::traits::notifier::ChangeNotifier;
use drafthub_core::types::id::{DocumentId, VersionId};
use drafthub_core::types::pagination::{CursorPage, CursorRequest};
use drafthub_entity::document::FileVersion;
use drafthub_store::VersionStore;

/// Manages document version history.
#[derive(Clone)]
pub struct HistoryService {
    /// Version storage backend.
    store: Arc<dyn VersionStore>,
    /// Change notification sink.
    notifier: Arc<dyn ChangeNotifier>,
    /// Engine limits.
    config: HistoryConfig,
}

impl HistoryService {
    /// Creates a new history service.
    pub fn new(
        store: Arc<dyn VersionStore>,
        notifier: Arc<dyn ChangeNotifier>,
        config: HistoryConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            config,
        }
    }

    pub(crate) fn config(&self) -> &HistoryConfig {
        &self.config
    }

    pub(crate) fn store(&self) -> &Arc<dyn VersionStore> {
        &self.store
    }

    /// Creates a new version snapshot.
    ///
    /// Input is validated before anything is written; a failed create has
    /// no side effect on the history.
    pub async fn create_version(
        &self,
        document_id: DocumentId,
        content: String,
        author: String,
        message: Option<String>,
    ) -> AppResult<FileVersion> {
        self.validate_input(&content, &author, message.as_deref())?;

        let version = self
            .store
            .create_version(document_id, content, author, message)
            .await?;

        self.notifier
            .notify(DomainEvent::new(
                Some(version.author.clone()),
                DocumentEvent::VersionCreated {
                    document_id,
                    version_id: version.id,
                },
            ))
            .await;

        Ok(version)
    }

    /// Lists versions most-recent-first with cursor pagination.
    pub async fn list_versions(
        &self,
        document_id: DocumentId,
        page: &CursorRequest,
    ) -> AppResult<CursorPage<FileVersion>> {
        self.store.list_versions(document_id, page).await
    }

    /// Fetches a single version.
    pub async fn get_version(
        &self,
        document_id: DocumentId,
        version_id: VersionId,
    ) -> AppResult<FileVersion> {
        self.store
            .get_version(document_id, version_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Version {version_id} not found for document {document_id}"
                ))
            })
    }

    /// The current head version.
    pub async fn latest_version(&self, document_id: DocumentId) -> AppResult<FileVersion> {
        self.store
            .latest_version(document_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {document_id} has no versions")))
    }

    fn validate_input(
        &self,
        content: &str,
        author: &str,
        message: Option<&str>,
    ) -> AppResult<()> {
        if author.trim().is_empty() {
            return Err(AppError::validation("Author must not be empty"));
        }
        if content.contains('\0') {
            return Err(AppError::validation(
                "Content must be text; binary content is not versioned",
            ));
        }
        if content.len() > self.config.max_content_bytes {
            return Err(AppError::size_limit(format!(
                "Content exceeds the {} byte limit",
                self.config.max_content_bytes
            )));
        }
        if let Some(message) = message {
            if message.len() > self.config.max_message_length {
                return Err(AppError::validation(format!(
                    "Message exceeds {} characters",
                    self.config.max_message_length
                )));
            }
        }
        Ok(())
    }

    /// Emit a rollback notification. Called by the rollback service after
    /// the new head version committed.
    pub(crate) async fn notify_rollback(
        &self,
        document_id: DocumentId,
        new_version_id: VersionId,
        target_version_id: VersionId,
        actor: String,
    ) {
        info!(
            document_id = %document_id,
            new_version_id = %new_version_id,
            target_version_id = %target_version_id,
            "Document rolled back"
        );
        self.notifier
            .notify(DomainEvent::new(
                Some(actor),
                DocumentEvent::RolledBack {
                    document_id,
                    new_version_id,
                    target_version_id,
                },
            ))
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drafthub_core::traits::notifier::NullNotifier;
    use drafthub_store::MemoryVersionStore;

    fn make_service() -> HistoryService {
        let config = HistoryConfig::default();
        HistoryService::new(
            Arc::new(MemoryVersionStore::new(&config)),
            Arc::new(NullNotifier),
            config,
        )
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = make_service();
        let document_id = DocumentId::new();
        let created = service
            .create_version(
                document_id,
                "line one\nline two".to_string(),
                "alice".to_string(),
                None,
            )
            .await
            .unwrap();
        let fetched = service.get_version(document_id, created.id).await.unwrap();
        assert_eq!(fetched.content, "line one\nline two");
    }

    #[tokio::test]
    async fn test_empty_author_rejected_before_write() {
        let service = make_service();
        let document_id = DocumentId::new();
        let err = service
            .create_version(document_id, "text".to_string(), "  ".to_string(), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, drafthub_core::error::ErrorKind::Validation);

        // Nothing was written.
        let err = service
            .list_versions(document_id, &CursorRequest::first_page(10))
            .await
            .unwrap_err();
        assert_eq!(err.kind, drafthub_core::error::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_binary_content_rejected() {
        let service = make_service();
        let err = service
            .create_version(
                DocumentId::new(),
                "text\0binary".to_string(),
                "alice".to_string(),
                None,
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, drafthub_core::error::ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_oversized_message_rejected() {
        let config = HistoryConfig {
            max_message_length: 8,
            ..HistoryConfig::default()
        };
        let service = HistoryService::new(
            Arc::new(MemoryVersionStore::new(&config)),
            Arc::new(NullNotifier),
            config,
        );
        let err = service
            .create_version(
                DocumentId::new(),
                "text".to_string(),
                "alice".to_string(),
                Some("a much too long message".to_string()),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, drafthub_core::error::ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_oversized_content_rejected() {
        let config = HistoryConfig {
            max_content_bytes: 16,
            ..HistoryConfig::default()
        };
        let service = HistoryService::new(
            Arc::new(MemoryVersionStore::new(&config)),
            Arc::new(NullNotifier),
            config,
        );
        let err = service
            .create_version(
                DocumentId::new(),
                "this content is longer than sixteen bytes".to_string(),
                "alice".to_string(),
                None,
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, drafthub_core::error::ErrorKind::SizeLimit);
    }

    #[tokio::test]
    async fn test_get_unknown_version_is_not_found() {
        let service = make_service();
        let document_id = DocumentId::new();
        service
            .create_version(document_id, "a".to_string(), "alice".to_string(), None)
            .await
            .unwrap();
        let err = service
            .get_version(document_id, VersionId::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind, drafthub_core::error::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_latest_tracks_head() {
        let service = make_service();
        let document_id = DocumentId::new();
        service
            .create_version(document_id, "v1".to_string(), "alice".to_string(), None)
            .await
            .unwrap();
        let second = service
            .create_version(document_id, "v2".to_string(), "alice".to_string(), None)
            .await
            .unwrap();
        let head = service.latest_version(document_id).await.unwrap();
        assert_eq!(head.id, second.id);
        assert_eq!(head.content, "v2");
    }
}
