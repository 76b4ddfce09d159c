//! Request DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use drafthub_core::types::id::VersionId;
use drafthub_service::CompareSide;

/// POST /api/documents/:id/versions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVersionRequest {
    /// Full text snapshot to record.
    pub content: String,
    /// Opaque identity reference of the author.
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    /// Optional human-readable description.
    pub message: Option<String>,
}

/// GET /api/documents/:id/versions query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListVersionsQuery {
    /// Last-seen version id; omit for the first page.
    pub cursor: Option<Uuid>,
    /// Page size.
    pub limit: Option<usize>,
}

/// POST /api/documents/:id/compare
///
/// Each side is a tagged value:
/// `{"kind": "version", "version_id": "..."}`, `{"kind": "current"}`, or
/// `{"kind": "draft", "lines": ["..."]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    /// The old side of the comparison.
    pub a: CompareSide,
    /// The new side of the comparison.
    pub b: CompareSide,
}

/// POST /api/documents/:id/rollback
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RollbackRequest {
    /// The historical version to restore.
    pub target_version_id: VersionId,
    /// Opaque identity reference of who triggered the rollback.
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
}
