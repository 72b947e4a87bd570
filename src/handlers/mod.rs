// HTTP handlers for the protected /api surface.
//
// Handlers are thin: deserialize, call the store, wrap the result in the
// `{"success": true, "data": ...}` envelope. All domain rules live in
// the store.

pub mod locations;
pub mod reagents;
pub mod reports;
pub mod samples;
pub mod sops;
pub mod testing;
pub mod users;
pub mod warehouses;

use axum::{http::StatusCode, response::Json};
use serde::Serialize;
use serde_json::{json, Value};

pub(crate) fn ok<T: Serialize>(data: &T) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

pub(crate) fn created<T: Serialize>(data: &T) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, ok(data))
}

pub(crate) fn deleted() -> Json<Value> {
    Json(json!({ "success": true, "data": Value::Null }))
}
