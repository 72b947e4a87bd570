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
use crate::models::{UserAccountPayload, UserRole};
use crate::store::LimsStore;

#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    /// Identity-provider subject linked to the account.
    pub subject: Option<String>,
}

/// GET /api/users
pub async fn list(
    State(store): State<Arc<LimsStore>>,
    Query(query): Query<UserListQuery>,
) -> Json<Value> {
    ok(&store.list_users(query.subject.as_deref()).await)
}

/// POST /api/users
pub async fn create(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<UserAccountPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_user(payload).await?))
}

/// GET /api/users/:id
pub async fn get(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_user(id).await?))
}

/// PUT /api/users/:id
pub async fn update(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<UserAccountPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_user(id, payload).await?))
}

/// DELETE /api/users/:id
pub async fn delete(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_user(id).await?;
    Ok(deleted())
}

/// GET /api/users/:id/role
pub async fn get_role(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_user_role(id).await?))
}

/// PUT /api/users/:id/role
pub async fn set_role(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(role): Json<UserRole>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.set_user_role(id, role).await?))
}
