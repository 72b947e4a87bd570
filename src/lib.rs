//! Laboratory information management backend.
//!
//! A relational entity graph (users, SOPs, samples, tests, equipment,
//! reagents, warehouses and their link records) exposed as CRUD HTTP
//! endpoints plus two read-only dashboard aggregates. Authentication is
//! delegated to a JWT-verifying identity collaborator; all domain rules
//! (uniqueness, foreign keys, subtype pairing, cascade deletes) live in
//! the store layer.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod store;

use std::sync::Arc;

use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use handlers::{locations, reagents, reports, samples, sops, testing, users, warehouses};
use store::LimsStore;

/// Build the full application router over the given store.
pub fn app(store: Arc<LimsStore>) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Protected API
        .nest("/api", api_routes())
        .with_state(store)
        .layer(TraceLayer::new_for_http());

    if config::config().security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    router
}

fn api_routes() -> Router<Arc<LimsStore>> {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id", get(users::get).put(users::update).delete(users::delete))
        .route("/users/:id/role", get(users::get_role).put(users::set_role))
        .route("/sops", get(sops::list).post(sops::create))
        .route("/sops/:id", get(sops::get).put(sops::update).delete(sops::delete))
        // Version changes are append-only history, so no PUT route.
        .route(
            "/version-changes",
            get(sops::list_version_changes).post(sops::create_version_change),
        )
        .route(
            "/version-changes/:id",
            get(sops::get_version_change).delete(sops::delete_version_change),
        )
        .route("/sop-actions", get(sops::list_actions).post(sops::create_action))
        .route(
            "/sop-actions/:id",
            get(sops::get_action).put(sops::update_action).delete(sops::delete_action),
        )
        .route("/clients", get(warehouses::list_clients).post(warehouses::create_client))
        .route(
            "/clients/:id",
            get(warehouses::get_client)
                .put(warehouses::update_client)
                .delete(warehouses::delete_client),
        )
        .route("/warehouses", get(warehouses::list).post(warehouses::create))
        .route(
            "/warehouses/:id",
            get(warehouses::get).put(warehouses::update).delete(warehouses::delete),
        )
        .route(
            "/warehouse-client-links",
            get(warehouses::list_links).post(warehouses::create_link),
        )
        .route(
            "/warehouse-client-links/:id",
            get(warehouses::get_link)
                .put(warehouses::update_link)
                .delete(warehouses::delete_link),
        )
        .route("/locations", get(locations::list).post(locations::create))
        .route(
            "/locations/:id",
            get(locations::get).put(locations::update).delete(locations::delete),
        )
        .route("/equipment", get(locations::list_equipment).post(locations::create_equipment))
        .route(
            "/equipment/:id",
            get(locations::get_equipment)
                .put(locations::update_equipment)
                .delete(locations::delete_equipment),
        )
        .route("/maintenance-logs", get(locations::list_logs).post(locations::create_log))
        .route(
            "/maintenance-logs/:id",
            get(locations::get_log).put(locations::update_log).delete(locations::delete_log),
        )
        .route("/samples", get(samples::list).post(samples::create))
        .route(
            "/samples/:id",
            get(samples::get).put(samples::update).delete(samples::delete),
        )
        .route(
            "/user-sample-actions",
            get(samples::list_actions).post(samples::create_action),
        )
        .route(
            "/user-sample-actions/:id",
            get(samples::get_action)
                .put(samples::update_action)
                .delete(samples::delete_action),
        )
        .route("/tests", get(testing::list).post(testing::create))
        .route(
            "/tests/:id",
            get(testing::get).put(testing::update).delete(testing::delete),
        )
        .route(
            "/sample-test-links",
            get(testing::list_sample_links).post(testing::create_sample_link),
        )
        .route(
            "/sample-test-links/:id",
            get(testing::get_sample_link)
                .put(testing::update_sample_link)
                .delete(testing::delete_sample_link),
        )
        .route(
            "/test-equipment-links",
            get(testing::list_equipment_links).post(testing::create_equipment_link),
        )
        .route(
            "/test-equipment-links/:id",
            get(testing::get_equipment_link)
                .put(testing::update_equipment_link)
                .delete(testing::delete_equipment_link),
        )
        .route("/reagents", get(reagents::list).post(reagents::create))
        .route(
            "/reagents/:id",
            get(reagents::get).put(reagents::update).delete(reagents::delete),
        )
        .route(
            "/user-reagent-actions",
            get(reagents::list_actions).post(reagents::create_action),
        )
        .route(
            "/user-reagent-actions/:id",
            get(reagents::get_action)
                .put(reagents::update_action)
                .delete(reagents::delete_action),
        )
        .route(
            "/test-reagent-links",
            get(testing::list_reagent_links).post(testing::create_reagent_link),
        )
        .route(
            "/test-reagent-links/:id",
            get(testing::get_reagent_link)
                .put(testing::update_reagent_link)
                .delete(testing::delete_reagent_link),
        )
        .route("/dashboard/warehouse-clients", get(reports::warehouse_clients))
        .route("/dashboard/version-changes", get(reports::version_changes))
        .route_layer(axum::middleware::from_fn(middleware::require_identity))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "LIMS API",
            "version": version,
            "description": "Laboratory information management backend",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "resources": "/api/<resource>[/:id] (protected)",
                "dashboards": "/api/dashboard/warehouse-clients, /api/dashboard/version-changes (protected)",
            }
        }
    }))
}

async fn health(
    axum::extract::State(store): axum::extract::State<Arc<LimsStore>>,
) -> axum::response::Json<Value> {
    let now = chrono::Utc::now();
    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": now,
            "records": store.record_count().await,
        }
    }))
}
