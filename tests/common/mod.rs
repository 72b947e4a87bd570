#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use lims_api::store::LimsStore;

/// Fresh application over an empty store.
pub fn test_app() -> Router {
    lims_api::app(Arc::new(LimsStore::new()))
}

/// Bearer header value for an authenticated test caller.
pub fn bearer() -> String {
    let token = lims_api::auth::issue_token("test-suite").expect("token");
    format!("Bearer {token}")
}

/// Send one request through the router and decode the JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
    authorization: Option<&str>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(authorization) = authorization {
        builder = builder.header(header::AUTHORIZATION, authorization);
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

pub async fn get(app: &Router, path: &str) -> Result<(StatusCode, Value)> {
    send(app, "GET", path, None, Some(&bearer())).await
}

pub async fn post(app: &Router, path: &str, body: Value) -> Result<(StatusCode, Value)> {
    send(app, "POST", path, Some(body), Some(&bearer())).await
}

pub async fn put(app: &Router, path: &str, body: Value) -> Result<(StatusCode, Value)> {
    send(app, "PUT", path, Some(body), Some(&bearer())).await
}

pub async fn delete(app: &Router, path: &str) -> Result<(StatusCode, Value)> {
    send(app, "DELETE", path, None, Some(&bearer())).await
}

/// Create a resource and return its assigned id.
pub async fn create(app: &Router, path: &str, body: Value) -> Result<i64> {
    let (status, value) = post(app, path, body).await?;
    anyhow::ensure!(
        status == StatusCode::CREATED,
        "create {path} failed: {status} {value}"
    );
    value["data"]["id"]
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("no id in {value}"))
}

pub async fn seed_user(app: &Router, username: &str) -> Result<i64> {
    create(
        app,
        "/api/users",
        json!({
            "account_username": username,
            "first_name": "Sam",
            "last_name": "Rivera",
            "phone": "555-0199",
            "email": format!("{username}@lab.example"),
            "department": "Quality Control",
            "training_completed": true,
            "is_analyst": true,
            "is_administrator": false
        }),
    )
    .await
}

pub async fn seed_sop(app: &Router, name: &str) -> Result<i64> {
    create(
        app,
        "/api/sops",
        json!({
            "sop_name": name,
            "version_number": "1.0",
            "effective_date": "2024-01-15"
        }),
    )
    .await
}

pub async fn seed_location(app: &Router, location_type: &str, room: i32) -> Result<i64> {
    create(
        app,
        "/api/locations",
        json!({ "location_type": location_type, "room_number": room }),
    )
    .await
}

pub async fn seed_client(app: &Router, name: &str) -> Result<i64> {
    create(app, "/api/clients", json!({ "client_name": name })).await
}

pub async fn seed_warehouse(app: &Router, sop_id: i64, facility: &str, company: &str) -> Result<i64> {
    create(
        app,
        "/api/warehouses",
        json!({
            "sop_id": sop_id,
            "warehouse_technician": "Lee Ortiz",
            "warehouse_facility": facility,
            "warehouse_company": company
        }),
    )
    .await
}

pub async fn seed_sample(
    app: &Router,
    location_id: i64,
    warehouse_id: i64,
    sop_id: i64,
) -> Result<i64> {
    create(
        app,
        "/api/samples",
        json!({
            "location_id": location_id,
            "warehouse_id": warehouse_id,
            "sop_id": sop_id,
            "product_name": "Ibuprofen 200mg",
            "product_stage": "Granulation",
            "quantity": "250",
            "time_received": "2024-03-01T10:00:00Z",
            "sample_type": "I",
            "storage_conditions": "25C",
            "detail": { "kind": "in_process", "time_sampled": "2024-03-01T09:30:00Z" }
        }),
    )
    .await
}
