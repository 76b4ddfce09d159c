//! Version history handlers: create, list, fetch, compare, rollback.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use drafthub_core::error::AppError;
use drafthub_core::types::id::{DocumentId, VersionId};
use drafthub_core::types::pagination::CursorRequest;
use drafthub_entity::document::FileVersion;

use crate::dto::request::{
    CompareRequest, CreateVersionRequest, ListVersionsQuery, RollbackRequest,
};
use crate::dto::response::{ApiResponse, CompareResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/documents/:id/versions
pub async fn create_version(
    State(state): State<AppState>,
    Path(document_id): Path<Uuid>,
    Json(payload): Json<CreateVersionRequest>,
) -> Result<Json<ApiResponse<FileVersion>>, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let version = state
        .history_service
        .create_version(
            DocumentId::from_uuid(document_id),
            payload.content,
            payload.author,
            payload.message,
        )
        .await?;

    Ok(Json(ApiResponse::ok(version)))
}

/// GET /api/documents/:id/versions
pub async fn list_versions(
    State(state): State<AppState>,
    Path(document_id): Path<Uuid>,
    Query(query): Query<ListVersionsQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request = CursorRequest {
        cursor: query.cursor.map(VersionId::from_uuid),
        limit: query.limit,
    };
    let page = state
        .history_service
        .list_versions(DocumentId::from_uuid(document_id), &request)
        .await?;

    // Listings carry metadata only; fetch a single version for content.
    let items: Vec<FileVersion> = page.items.iter().map(FileVersion::without_content).collect();

    Ok(Json(serde_json::json!({
        "success": true,
        "data": {
            "items": items,
            "next_cursor": page.next_cursor,
            "has_more": page.has_more,
        }
    })))
}

/// GET /api/documents/:id/versions/:version_id
pub async fn get_version(
    State(state): State<AppState>,
    Path((document_id, version_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<FileVersion>>, ApiError> {
    let version = state
        .history_service
        .get_version(
            DocumentId::from_uuid(document_id),
            VersionId::from_uuid(version_id),
        )
        .await?;
    Ok(Json(ApiResponse::ok(version)))
}

/// POST /api/documents/:id/compare
pub async fn compare(
    State(state): State<AppState>,
    Path(document_id): Path<Uuid>,
    Json(payload): Json<CompareRequest>,
) -> Result<Json<ApiResponse<CompareResponse>>, ApiError> {
    let outcome = state
        .history_service
        .compare(DocumentId::from_uuid(document_id), payload.a, payload.b)
        .await?;
    Ok(Json(ApiResponse::ok(CompareResponse::from_outcome(outcome))))
}

/// POST /api/documents/:id/rollback
pub async fn rollback(
    State(state): State<AppState>,
    Path(document_id): Path<Uuid>,
    Json(payload): Json<RollbackRequest>,
) -> Result<Json<ApiResponse<FileVersion>>, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let version = state
        .rollback_service
        .rollback(
            DocumentId::from_uuid(document_id),
            payload.target_version_id,
            payload.author,
        )
        .await?;
    Ok(Json(ApiResponse::ok(version)))
}
