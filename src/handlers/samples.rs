use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;

use super::{created, deleted, ok};
use crate::error::ApiError;
use crate::models::{SamplePayload, UserSampleActionPayload};
use crate::store::LimsStore;

#[derive(Debug, Deserialize)]
pub struct SampleListQuery {
    pub warehouse_id: Option<i64>,
}

/// GET /api/samples
pub async fn list(
    State(store): State<Arc<LimsStore>>,
    Query(query): Query<SampleListQuery>,
) -> Json<Value> {
    ok(&store.list_samples(query.warehouse_id).await)
}

/// POST /api/samples
pub async fn create(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<SamplePayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_sample(payload).await?))
}

/// GET /api/samples/:id
pub async fn get(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_sample(id).await?))
}

/// PUT /api/samples/:id
pub async fn update(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<SamplePayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_sample(id, payload).await?))
}

/// DELETE /api/samples/:id
pub async fn delete(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_sample(id).await?;
    Ok(deleted())
}

/// GET /api/user-sample-actions
pub async fn list_actions(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_sample_actions().await)
}

/// POST /api/user-sample-actions
pub async fn create_action(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<UserSampleActionPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_sample_action(payload).await?))
}

/// GET /api/user-sample-actions/:id
pub async fn get_action(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_sample_action(id).await?))
}

/// PUT /api/user-sample-actions/:id
pub async fn update_action(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<UserSampleActionPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_sample_action(id, payload).await?))
}

/// DELETE /api/user-sample-actions/:id
pub async fn delete_action(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_sample_action(id).await?;
    Ok(deleted())
}
