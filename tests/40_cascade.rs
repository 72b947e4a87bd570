mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

async fn count(app: &axum::Router, path: &str) -> Result<usize> {
    let (status, body) = common::get(app, path).await?;
    anyhow::ensure!(status == StatusCode::OK, "list {path} failed: {status}");
    Ok(body["data"].as_array().map(Vec::len).unwrap_or(0))
}

#[tokio::test]
async fn deleting_a_sop_removes_its_dependent_subtree() -> Result<()> {
    let app = common::test_app();
    let doomed = common::seed_sop(&app, "DOOMED").await?;
    let kept = common::seed_sop(&app, "KEPT").await?;
    let location_id = common::seed_location(&app, "Bench", 1).await?;
    let user_id = common::seed_user(&app, "cascade-user").await?;

    // Dependents of the doomed SOP.
    let doomed_warehouse = common::seed_warehouse(&app, doomed, "Plant A", "Acme").await?;
    common::seed_sample(&app, location_id, doomed_warehouse, doomed).await?;
    common::create(
        &app,
        "/api/equipment",
        json!({
            "location_id": location_id,
            "sop_id": doomed,
            "equipment_name": "HPLC-1",
            "min_use_range": "0.000001",
            "max_use_range": "50.000000",
            "in_use": true
        }),
    )
    .await?;
    common::create(
        &app,
        "/api/version-changes",
        json!({
            "sop_id": doomed,
            "old_version_number": "1.0",
            "new_version_number": "1.1",
            "old_effective_date": "2024-01-01",
            "new_effective_date": "2024-02-01",
            "change_date": "2024-01-20"
        }),
    )
    .await?;
    common::create(
        &app,
        "/api/tests",
        json!({ "user_account_id": user_id, "sop_id": doomed }),
    )
    .await?;

    // Dependents of the surviving SOP.
    let kept_warehouse = common::seed_warehouse(&app, kept, "Plant B", "Acme").await?;
    common::seed_sample(&app, location_id, kept_warehouse, kept).await?;

    let (status, _) = common::delete(&app, &format!("/api/sops/{doomed}")).await?;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(count(&app, "/api/sops").await?, 1);
    assert_eq!(count(&app, "/api/warehouses").await?, 1);
    assert_eq!(count(&app, "/api/samples").await?, 1);
    assert_eq!(count(&app, "/api/equipment").await?, 0);
    assert_eq!(count(&app, "/api/version-changes").await?, 0);
    assert_eq!(count(&app, "/api/tests").await?, 0);
    // Unrelated records survive untouched.
    assert_eq!(count(&app, "/api/locations").await?, 1);
    assert_eq!(count(&app, "/api/users").await?, 1);
    Ok(())
}

#[tokio::test]
async fn deleting_a_user_removes_tests_and_their_links() -> Result<()> {
    let app = common::test_app();
    let sop_id = common::seed_sop(&app, "USR-01").await?;
    let location_id = common::seed_location(&app, "Bench", 2).await?;
    let warehouse_id = common::seed_warehouse(&app, sop_id, "Plant C", "Acme").await?;
    let sample_id = common::seed_sample(&app, location_id, warehouse_id, sop_id).await?;
    let user_id = common::seed_user(&app, "departing").await?;

    let test_id = common::create(
        &app,
        "/api/tests",
        json!({ "user_account_id": user_id, "sop_id": sop_id }),
    )
    .await?;
    common::create(
        &app,
        "/api/sample-test-links",
        json!({
            "sample_id": sample_id,
            "test_id": test_id,
            "testing_analyst": "A. Cho",
            "reviewing_analyst": "B. Patel",
            "test_result": "4.5",
            "deadline": "2024-05-01T00:00:00Z",
            "pass_or_fail": true
        }),
    )
    .await?;
    common::create(
        &app,
        "/api/user-sample-actions",
        json!({
            "user_account_id": user_id,
            "sample_id": sample_id,
            "receiving_analyst": "A. Cho"
        }),
    )
    .await?;

    let (status, _) = common::delete(&app, &format!("/api/users/{user_id}")).await?;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(count(&app, "/api/tests").await?, 0);
    assert_eq!(count(&app, "/api/sample-test-links").await?, 0);
    assert_eq!(count(&app, "/api/user-sample-actions").await?, 0);
    // The sample itself does not belong to the user.
    assert_eq!(count(&app, "/api/samples").await?, 1);
    Ok(())
}

#[tokio::test]
async fn deleting_a_warehouse_removes_its_samples_and_shipments() -> Result<()> {
    let app = common::test_app();
    let sop_id = common::seed_sop(&app, "WHD-01").await?;
    let location_id = common::seed_location(&app, "Bench", 3).await?;
    let client_id = common::seed_client(&app, "Contoso Pharma").await?;
    let doomed = common::seed_warehouse(&app, sop_id, "Plant D", "Acme").await?;
    let kept = common::seed_warehouse(&app, sop_id, "Plant E", "Acme").await?;

    common::seed_sample(&app, location_id, doomed, sop_id).await?;
    common::seed_sample(&app, location_id, kept, sop_id).await?;
    common::create(
        &app,
        "/api/warehouse-client-links",
        json!({
            "warehouse_id": doomed,
            "client_id": client_id,
            "quantity_shipped": "12.5",
            "delivery_service": "FastFreight",
            "shipping_time": "2024-03-01T08:00:00Z",
            "delivery_time": "2024-03-02T16:00:00Z",
            "acceptable_delivery": true
        }),
    )
    .await?;

    let (status, _) = common::delete(&app, &format!("/api/warehouses/{doomed}")).await?;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(count(&app, "/api/warehouses").await?, 1);
    assert_eq!(count(&app, "/api/samples").await?, 1);
    assert_eq!(count(&app, "/api/warehouse-client-links").await?, 0);
    // Clients are independent of their shipments.
    assert_eq!(count(&app, "/api/clients").await?, 1);
    Ok(())
}

#[tokio::test]
async fn deleting_a_client_leaves_warehouses_in_place() -> Result<()> {
    let app = common::test_app();
    let sop_id = common::seed_sop(&app, "CLI-01").await?;
    let warehouse_id = common::seed_warehouse(&app, sop_id, "Plant F", "Acme").await?;
    let client_id = common::seed_client(&app, "Globex").await?;
    common::create(
        &app,
        "/api/warehouse-client-links",
        json!({
            "warehouse_id": warehouse_id,
            "client_id": client_id,
            "quantity_shipped": "3.0",
            "delivery_service": "FastFreight",
            "shipping_time": "2024-03-05T08:00:00Z",
            "delivery_time": "2024-03-06T16:00:00Z",
            "acceptable_delivery": false
        }),
    )
    .await?;

    let (status, _) = common::delete(&app, &format!("/api/clients/{client_id}")).await?;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(count(&app, "/api/warehouse-client-links").await?, 0);
    assert_eq!(count(&app, "/api/warehouses").await?, 1);
    Ok(())
}

#[tokio::test]
async fn deleting_equipment_removes_logs_and_test_links_only() -> Result<()> {
    let app = common::test_app();
    let sop_id = common::seed_sop(&app, "EQD-01").await?;
    let location_id = common::seed_location(&app, "Bench", 4).await?;
    let user_id = common::seed_user(&app, "eq-owner").await?;
    let equipment_id = common::create(
        &app,
        "/api/equipment",
        json!({
            "location_id": location_id,
            "sop_id": sop_id,
            "equipment_name": "Balance-1",
            "min_use_range": "0.000010",
            "max_use_range": "210.000000",
            "in_use": true
        }),
    )
    .await?;
    common::create(
        &app,
        "/api/maintenance-logs",
        json!({
            "equipment_id": equipment_id,
            "sop_id": sop_id,
            "service_date": "2024-02-01",
            "service_description": "Annual calibration",
            "service_interval": "12 months",
            "next_service_date": "2025-02-01"
        }),
    )
    .await?;
    let test_id = common::create(
        &app,
        "/api/tests",
        json!({ "user_account_id": user_id, "sop_id": sop_id }),
    )
    .await?;
    common::create(
        &app,
        "/api/test-equipment-links",
        json!({ "test_id": test_id, "equipment_id": equipment_id }),
    )
    .await?;

    let (status, _) = common::delete(&app, &format!("/api/equipment/{equipment_id}")).await?;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(count(&app, "/api/maintenance-logs").await?, 0);
    assert_eq!(count(&app, "/api/test-equipment-links").await?, 0);
    // The test used the equipment but is not owned by it.
    assert_eq!(count(&app, "/api/tests").await?, 1);
    Ok(())
}

#[tokio::test]
async fn cascade_delete_is_not_repeatable() -> Result<()> {
    let app = common::test_app();
    let sop_id = common::seed_sop(&app, "GONE-01").await?;
    let (status, _) = common::delete(&app, &format!("/api/sops/{sop_id}")).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = common::delete(&app, &format!("/api/sops/{sop_id}")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}
