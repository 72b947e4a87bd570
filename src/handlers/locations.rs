use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;

use super::{created, deleted, ok};
use crate::error::ApiError;
use crate::models::{EquipmentPayload, LocationPayload, MaintenanceLogPayload};
use crate::store::LimsStore;

/// GET /api/locations
pub async fn list(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_locations().await)
}

/// POST /api/locations
pub async fn create(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<LocationPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_location(payload).await?))
}

/// GET /api/locations/:id
pub async fn get(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_location(id).await?))
}

/// PUT /api/locations/:id
pub async fn update(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<LocationPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_location(id, payload).await?))
}

/// DELETE /api/locations/:id
pub async fn delete(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_location(id).await?;
    Ok(deleted())
}

/// GET /api/equipment
pub async fn list_equipment(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_equipment().await)
}

/// POST /api/equipment
pub async fn create_equipment(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<EquipmentPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_equipment(payload).await?))
}

/// GET /api/equipment/:id
pub async fn get_equipment(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_equipment(id).await?))
}

/// PUT /api/equipment/:id
pub async fn update_equipment(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<EquipmentPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_equipment(id, payload).await?))
}

/// DELETE /api/equipment/:id
pub async fn delete_equipment(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_equipment(id).await?;
    Ok(deleted())
}

/// GET /api/maintenance-logs
pub async fn list_logs(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_maintenance_logs().await)
}

/// POST /api/maintenance-logs
pub async fn create_log(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<MaintenanceLogPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_maintenance_log(payload).await?))
}

/// GET /api/maintenance-logs/:id
pub async fn get_log(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_maintenance_log(id).await?))
}

/// PUT /api/maintenance-logs/:id
pub async fn update_log(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<MaintenanceLogPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_maintenance_log(id, payload).await?))
}

/// DELETE /api/maintenance-logs/:id
pub async fn delete_log(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_maintenance_log(id).await?;
    Ok(deleted())
}
