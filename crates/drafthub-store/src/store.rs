//! The version store trait.

use async_trait::async_trait;

use drafthub_core::result::AppResult;
use drafthub_core::types::id::{DocumentId, VersionId};
use drafthub_core::types::pagination::{CursorPage, CursorRequest};
use drafthub_entity::document::FileVersion;

/// Append-only storage of document version history.
///
/// Implementations must serialize `create_version` calls per document so
/// that timestamps are strictly increasing within one document's history,
/// while writes to different documents proceed independently. Reads only
/// ever observe committed entries.
#[async_trait]
pub trait VersionStore: Send + Sync + 'static {
    /// Append a new immutable version and return it.
    ///
    /// The assigned timestamp is strictly greater (at millisecond
    /// granularity) than every prior version of the same document.
    async fn create_version(
        &self,
        document_id: DocumentId,
        content: String,
        author: String,
        message: Option<String>,
    ) -> AppResult<FileVersion>;

    /// Fetch a single version. `None` when the version does not exist or
    /// belongs to a different document.
    async fn get_version(
        &self,
        document_id: DocumentId,
        version_id: VersionId,
    ) -> AppResult<Option<FileVersion>>;

    /// The most recently appended version, if the document has any.
    async fn latest_version(&self, document_id: DocumentId) -> AppResult<Option<FileVersion>>;

    /// List versions most-recent-first with cursor pagination.
    ///
    /// Fails with `NotFound` for a document with no history. The cursor
    /// is the last-seen version id, so pages stay stable while new
    /// versions are appended at the head.
    async fn list_versions(
        &self,
        document_id: DocumentId,
        page: &CursorRequest,
    ) -> AppResult<CursorPage<FileVersion>>;
}
