mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn sop_round_trips_and_enforces_unique_name() -> Result<()> {
    let app = common::test_app();
    let (status, created) = common::post(
        &app,
        "/api/sops",
        json!({ "sop_name": "QC-01", "version_number": "1.0", "effective_date": "2024-01-15" }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["version_number"], "1.0");

    let (status, body) = common::post(
        &app,
        "/api/sops",
        json!({ "sop_name": "QC-01", "version_number": "2.0", "effective_date": "2024-06-01" }),
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
    Ok(())
}

#[tokio::test]
async fn sop_version_must_have_one_fractional_digit() -> Result<()> {
    let app = common::test_app();
    let (status, body) = common::post(
        &app,
        "/api/sops",
        json!({ "sop_name": "QC-02", "version_number": "1.25", "effective_date": "2024-01-15" }),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    Ok(())
}

#[tokio::test]
async fn location_pair_is_unique_together() -> Result<()> {
    let app = common::test_app();
    common::seed_location(&app, "Freezer", 101).await?;
    // Same type in a different room is fine.
    common::seed_location(&app, "Freezer", 102).await?;

    let (status, _) = common::post(
        &app,
        "/api/locations",
        json!({ "location_type": "Freezer", "room_number": 101 }),
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn warehouse_pair_is_unique_together() -> Result<()> {
    let app = common::test_app();
    let sop_id = common::seed_sop(&app, "WH-01").await?;
    common::seed_warehouse(&app, sop_id, "North Plant", "Acme Storage").await?;
    let (status, _) = common::post(
        &app,
        "/api/warehouses",
        json!({
            "sop_id": sop_id,
            "warehouse_technician": "Jo Kim",
            "warehouse_facility": "North Plant",
            "warehouse_company": "Acme Storage"
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn equipment_requires_existing_references() -> Result<()> {
    let app = common::test_app();
    let location_id = common::seed_location(&app, "Bench", 3).await?;
    let (status, body) = common::post(
        &app,
        "/api/equipment",
        json!({
            "location_id": location_id,
            "sop_id": 999,
            "equipment_name": "HPLC-7",
            "min_use_range": "0.000001",
            "max_use_range": "99.999999",
            "in_use": true
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn equipment_round_trips_six_decimal_ranges() -> Result<()> {
    let app = common::test_app();
    let sop_id = common::seed_sop(&app, "EQ-01").await?;
    let location_id = common::seed_location(&app, "Bench", 4).await?;
    let (status, body) = common::post(
        &app,
        "/api/equipment",
        json!({
            "location_id": location_id,
            "sop_id": sop_id,
            "equipment_name": "Balance-2",
            "min_use_range": "0.000010",
            "max_use_range": "210.000000",
            "in_use": false
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["min_use_range"], "0.000010");
    assert_eq!(body["data"]["max_use_range"], "210.000000");
    Ok(())
}

#[tokio::test]
async fn test_without_bounds_is_accepted() -> Result<()> {
    let app = common::test_app();
    let sop_id = common::seed_sop(&app, "TST-01").await?;
    let user_id = common::seed_user(&app, "tester").await?;
    let (status, body) = common::post(
        &app,
        "/api/tests",
        json!({ "user_account_id": user_id, "sop_id": sop_id }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["min_acceptable_result"], serde_json::Value::Null);
    assert_eq!(body["data"]["max_acceptable_result"], serde_json::Value::Null);
    Ok(())
}

#[tokio::test]
async fn tests_filter_by_performing_analyst() -> Result<()> {
    let app = common::test_app();
    let sop_id = common::seed_sop(&app, "TST-02").await?;
    let first = common::seed_user(&app, "analyst-one").await?;
    let second = common::seed_user(&app, "analyst-two").await?;
    common::create(&app, "/api/tests", json!({ "user_account_id": first, "sop_id": sop_id })).await?;
    common::create(&app, "/api/tests", json!({ "user_account_id": second, "sop_id": sop_id })).await?;

    let (_, body) = common::get(&app, &format!("/api/tests?analyst_id={first}")).await?;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["user_account_id"], first);
    Ok(())
}

#[tokio::test]
async fn version_changes_have_no_update_route() -> Result<()> {
    let app = common::test_app();
    let sop_id = common::seed_sop(&app, "VC-01").await?;
    let id = common::create(
        &app,
        "/api/version-changes",
        json!({
            "sop_id": sop_id,
            "old_version_number": "1.0",
            "new_version_number": "1.1",
            "old_effective_date": "2024-01-01",
            "new_effective_date": "2024-02-01",
            "change_date": "2024-01-20"
        }),
    )
    .await?;

    let (status, _) = common::put(
        &app,
        &format!("/api/version-changes/{id}"),
        json!({
            "sop_id": sop_id,
            "old_version_number": "1.0",
            "new_version_number": "1.2",
            "old_effective_date": "2024-01-01",
            "new_effective_date": "2024-03-01",
            "change_date": "2024-02-20"
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    Ok(())
}
