mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

async fn seed_graph(app: &axum::Router) -> Result<(i64, i64, i64)> {
    let sop_id = common::seed_sop(app, "SMP-01").await?;
    let location_id = common::seed_location(app, "Cold Room", 12).await?;
    let warehouse_id = common::seed_warehouse(app, sop_id, "East Wing", "Acme Storage").await?;
    Ok((sop_id, location_id, warehouse_id))
}

fn sample_payload(
    location_id: i64,
    warehouse_id: i64,
    sop_id: i64,
    sample_type: &str,
    detail: serde_json::Value,
) -> serde_json::Value {
    json!({
        "location_id": location_id,
        "warehouse_id": warehouse_id,
        "sop_id": sop_id,
        "product_name": "Amoxicillin 500mg",
        "product_stage": "Blending",
        "quantity": "120",
        "time_received": "2024-04-02T08:15:00Z",
        "sample_type": sample_type,
        "storage_conditions": "2-8C",
        "detail": detail
    })
}

#[tokio::test]
async fn stability_sample_gets_exactly_its_detail() -> Result<()> {
    let app = common::test_app();
    let (sop_id, location_id, warehouse_id) = seed_graph(&app).await?;
    let (status, body) = common::post(
        &app,
        "/api/samples",
        sample_payload(
            location_id,
            warehouse_id,
            sop_id,
            "S",
            json!({ "kind": "stability", "stability_conditions": "40C/75%RH" }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["sample_type"], "S");
    assert_eq!(body["data"]["detail"]["kind"], "stability");
    assert_eq!(body["data"]["detail"]["stability_conditions"], "40C/75%RH");
    Ok(())
}

#[tokio::test]
async fn mismatched_detail_is_rejected() -> Result<()> {
    let app = common::test_app();
    let (sop_id, location_id, warehouse_id) = seed_graph(&app).await?;
    let (status, body) = common::post(
        &app,
        "/api/samples",
        sample_payload(
            location_id,
            warehouse_id,
            sop_id,
            "S",
            json!({ "kind": "in_process", "time_sampled": "2024-04-02T07:00:00Z" }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // Nothing was persisted.
    let (_, list) = common::get(&app, "/api/samples").await?;
    assert_eq!(list["data"].as_array().unwrap().len(), 0);
    Ok(())
}

#[tokio::test]
async fn unknown_sample_type_is_rejected() -> Result<()> {
    let app = common::test_app();
    let (sop_id, location_id, warehouse_id) = seed_graph(&app).await?;
    let (status, body) = common::post(
        &app,
        "/api/samples",
        sample_payload(
            location_id,
            warehouse_id,
            sop_id,
            "X",
            json!({ "kind": "stability", "stability_conditions": "40C/75%RH" }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    Ok(())
}

#[tokio::test]
async fn finished_product_sample_round_trips() -> Result<()> {
    let app = common::test_app();
    let (sop_id, location_id, warehouse_id) = seed_graph(&app).await?;
    let (status, created) = common::post(
        &app,
        "/api/samples",
        sample_payload(
            location_id,
            warehouse_id,
            sop_id,
            "F",
            json!({ "kind": "finished_product", "product_lot_number": 700412 }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["id"].as_i64().unwrap();

    let (_, fetched) = common::get(&app, &format!("/api/samples/{id}")).await?;
    assert_eq!(fetched["data"], created["data"]);
    assert_eq!(fetched["data"]["detail"]["product_lot_number"], 700412);
    Ok(())
}

#[tokio::test]
async fn update_can_retype_a_sample() -> Result<()> {
    let app = common::test_app();
    let (sop_id, location_id, warehouse_id) = seed_graph(&app).await?;
    let id = common::seed_sample(&app, location_id, warehouse_id, sop_id).await?;

    let (status, body) = common::put(
        &app,
        &format!("/api/samples/{id}"),
        sample_payload(
            location_id,
            warehouse_id,
            sop_id,
            "F",
            json!({ "kind": "finished_product", "product_lot_number": 88 }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["sample_type"], "F");
    assert_eq!(body["data"]["detail"]["kind"], "finished_product");
    Ok(())
}

#[tokio::test]
async fn samples_filter_by_warehouse() -> Result<()> {
    let app = common::test_app();
    let (sop_id, location_id, warehouse_id) = seed_graph(&app).await?;
    let other_warehouse = common::seed_warehouse(&app, sop_id, "West Wing", "Acme Storage").await?;
    common::seed_sample(&app, location_id, warehouse_id, sop_id).await?;
    common::seed_sample(&app, location_id, warehouse_id, sop_id).await?;
    common::seed_sample(&app, location_id, other_warehouse, sop_id).await?;

    let (_, body) = common::get(&app, &format!("/api/samples?warehouse_id={warehouse_id}")).await?;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["warehouse_id"] == warehouse_id));
    Ok(())
}

#[tokio::test]
async fn sample_with_missing_warehouse_is_not_found() -> Result<()> {
    let app = common::test_app();
    let (sop_id, location_id, _) = seed_graph(&app).await?;
    let (status, body) = common::post(
        &app,
        "/api/samples",
        sample_payload(
            location_id,
            999,
            sop_id,
            "I",
            json!({ "kind": "in_process", "time_sampled": "2024-04-02T07:00:00Z" }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn sample_action_allows_unset_aliquoting_analyst() -> Result<()> {
    let app = common::test_app();
    let (sop_id, location_id, warehouse_id) = seed_graph(&app).await?;
    let sample_id = common::seed_sample(&app, location_id, warehouse_id, sop_id).await?;
    let user_id = common::seed_user(&app, "receiver").await?;

    let (status, body) = common::post(
        &app,
        "/api/user-sample-actions",
        json!({
            "user_account_id": user_id,
            "sample_id": sample_id,
            "receiving_analyst": "R. Singh"
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["aliquoting_analyst"], serde_json::Value::Null);
    Ok(())
}
