use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde_json::Value;

use super::ok;
use crate::store::LimsStore;

/// GET /api/dashboard/warehouse-clients
pub async fn warehouse_clients(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.warehouse_client_report().await)
}

/// GET /api/dashboard/version-changes
pub async fn version_changes(State(store): State<Arc<LimsStore>>) -> Json<Value> {
    ok(&store.version_change_report().await)
}
