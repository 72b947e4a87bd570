use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;

use super::{created, deleted, ok};
use crate::error::ApiError;
use crate::models::{ReagentPayload, UserReagentActionPayload};
use crate::store::LimsStore;

/// GET /api/reagents
pub async fn list(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_reagents().await)
}

/// POST /api/reagents
pub async fn create(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<ReagentPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_reagent(payload).await?))
}

/// GET /api/reagents/:id
pub async fn get(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_reagent(id).await?))
}

/// PUT /api/reagents/:id
pub async fn update(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<ReagentPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_reagent(id, payload).await?))
}

/// DELETE /api/reagents/:id
pub async fn delete(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_reagent(id).await?;
    Ok(deleted())
}

/// GET /api/user-reagent-actions
pub async fn list_actions(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_reagent_actions().await)
}

/// POST /api/user-reagent-actions
pub async fn create_action(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<UserReagentActionPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_reagent_action(payload).await?))
}

/// GET /api/user-reagent-actions/:id
pub async fn get_action(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_reagent_action(id).await?))
}

/// PUT /api/user-reagent-actions/:id
pub async fn update_action(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<UserReagentActionPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_reagent_action(id, payload).await?))
}

/// DELETE /api/user-reagent-actions/:id
pub async fn delete_action(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_reagent_action(id).await?;
    Ok(deleted())
}
