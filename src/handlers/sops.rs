use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;

use super::{created, deleted, ok};
use crate::error::ApiError;
use crate::models::{SopPayload, UserSopActionPayload, VersionChangePayload};
use crate::store::LimsStore;

/// GET /api/sops
pub async fn list(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_sops().await)
}

/// POST /api/sops
pub async fn create(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<SopPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_sop(payload).await?))
}

/// GET /api/sops/:id
pub async fn get(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_sop(id).await?))
}

/// PUT /api/sops/:id
pub async fn update(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<SopPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_sop(id, payload).await?))
}

/// DELETE /api/sops/:id
pub async fn delete(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_sop(id).await?;
    Ok(deleted())
}

// Version changes: append-only, so no update route.

/// GET /api/version-changes
pub async fn list_version_changes(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_version_changes().await)
}

/// POST /api/version-changes
pub async fn create_version_change(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<VersionChangePayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_version_change(payload).await?))
}

/// GET /api/version-changes/:id
pub async fn get_version_change(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_version_change(id).await?))
}

/// DELETE /api/version-changes/:id
pub async fn delete_version_change(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_version_change(id).await?;
    Ok(deleted())
}

/// GET /api/sop-actions
pub async fn list_actions(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_sop_actions().await)
}

/// POST /api/sop-actions
pub async fn create_action(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<UserSopActionPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_sop_action(payload).await?))
}

/// GET /api/sop-actions/:id
pub async fn get_action(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_sop_action(id).await?))
}

/// PUT /api/sop-actions/:id
pub async fn update_action(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<UserSopActionPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_sop_action(id, payload).await?))
}

/// DELETE /api/sop-actions/:id
pub async fn delete_action(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_sop_action(id).await?;
    Ok(deleted())
}
