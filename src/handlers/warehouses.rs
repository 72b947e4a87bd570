use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;

use super::{created, deleted, ok};
use crate::error::ApiError;
use crate::models::{ClientPayload, WarehouseClientLinkPayload, WarehousePayload};
use crate::store::LimsStore;

/// GET /api/clients
pub async fn list_clients(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_clients().await)
}

/// POST /api/clients
pub async fn create_client(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<ClientPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_client(payload).await?))
}

/// GET /api/clients/:id
pub async fn get_client(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_client(id).await?))
}

/// PUT /api/clients/:id
pub async fn update_client(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<ClientPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_client(id, payload).await?))
}

/// DELETE /api/clients/:id
pub async fn delete_client(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_client(id).await?;
    Ok(deleted())
}

/// GET /api/warehouses
pub async fn list(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_warehouses().await)
}

/// POST /api/warehouses
pub async fn create(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<WarehousePayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_warehouse(payload).await?))
}

/// GET /api/warehouses/:id
pub async fn get(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_warehouse(id).await?))
}

/// PUT /api/warehouses/:id
pub async fn update(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<WarehousePayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_warehouse(id, payload).await?))
}

/// DELETE /api/warehouses/:id
pub async fn delete(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_warehouse(id).await?;
    Ok(deleted())
}

/// GET /api/warehouse-client-links
pub async fn list_links(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_warehouse_client_links().await)
}

/// POST /api/warehouse-client-links
pub async fn create_link(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<WarehouseClientLinkPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_warehouse_client_link(payload).await?))
}

/// GET /api/warehouse-client-links/:id
pub async fn get_link(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_warehouse_client_link(id).await?))
}

/// PUT /api/warehouse-client-links/:id
pub async fn update_link(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<WarehouseClientLinkPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_warehouse_client_link(id, payload).await?))
}

/// DELETE /api/warehouse-client-links/:id
pub async fn delete_link(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_warehouse_client_link(id).await?;
    Ok(deleted())
}
