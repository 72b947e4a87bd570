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
use crate::models::{LabTestPayload, SampleTestLinkPayload, TestEquipmentLinkPayload, TestReagentLinkPayload};
use crate::store::LimsStore;

#[derive(Debug, Deserialize)]
pub struct TestListQuery {
    /// User account of the performing analyst.
    pub analyst_id: Option<i64>,
}

/// GET /api/tests
pub async fn list(
    State(store): State<Arc<LimsStore>>,
    Query(query): Query<TestListQuery>,
) -> Json<Value> {
    ok(&store.list_tests(query.analyst_id).await)
}

/// POST /api/tests
pub async fn create(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<LabTestPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_test(payload).await?))
}

/// GET /api/tests/:id
pub async fn get(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_test(id).await?))
}

/// PUT /api/tests/:id
pub async fn update(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<LabTestPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_test(id, payload).await?))
}

/// DELETE /api/tests/:id
pub async fn delete(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_test(id).await?;
    Ok(deleted())
}

/// GET /api/sample-test-links
pub async fn list_sample_links(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_sample_test_links().await)
}

/// POST /api/sample-test-links
pub async fn create_sample_link(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<SampleTestLinkPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_sample_test_link(payload).await?))
}

/// GET /api/sample-test-links/:id
pub async fn get_sample_link(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_sample_test_link(id).await?))
}

/// PUT /api/sample-test-links/:id
pub async fn update_sample_link(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<SampleTestLinkPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_sample_test_link(id, payload).await?))
}

/// DELETE /api/sample-test-links/:id
pub async fn delete_sample_link(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_sample_test_link(id).await?;
    Ok(deleted())
}

/// GET /api/test-equipment-links
pub async fn list_equipment_links(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_test_equipment_links().await)
}

/// POST /api/test-equipment-links
pub async fn create_equipment_link(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<TestEquipmentLinkPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_test_equipment_link(payload).await?))
}

/// GET /api/test-equipment-links/:id
pub async fn get_equipment_link(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_test_equipment_link(id).await?))
}

/// PUT /api/test-equipment-links/:id
pub async fn update_equipment_link(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<TestEquipmentLinkPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_test_equipment_link(id, payload).await?))
}

/// DELETE /api/test-equipment-links/:id
pub async fn delete_equipment_link(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_test_equipment_link(id).await?;
    Ok(deleted())
}

/// GET /api/test-reagent-links
pub async fn list_reagent_links(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.list_test_reagent_links().await)
}

/// POST /api/test-reagent-links
pub async fn create_reagent_link(
    State(store): State<Arc<LimsStore>>,
    Json(payload): Json<TestReagentLinkPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    Ok(created(&store.create_test_reagent_link(payload).await?))
}

/// GET /api/test-reagent-links/:id
pub async fn get_reagent_link(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.get_test_reagent_link(id).await?))
}

/// PUT /api/test-reagent-links/:id
pub async fn update_reagent_link(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<TestReagentLinkPayload>,
) -> Result<Json<Value>, ApiError> {
    Ok(ok(&store.update_test_reagent_link(id, payload).await?))
}

/// DELETE /api/test-reagent-links/:id
pub async fn delete_reagent_link(
    State(store): State<Arc<LimsStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    store.delete_test_reagent_link(id).await?;
    Ok(deleted())
}
