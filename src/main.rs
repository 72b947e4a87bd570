use std::sync::Arc;

use lims_api::{app, config, store::LimsStore};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up LIMS_JWT_SECRET, LIMS_PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting LIMS API in {:?} mode", config.environment);

    let store = Arc::new(LimsStore::new());
    let router = app(store);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("LIMS API listening on http://{}", bind_addr);

    axum::serve(listener, router).await.expect("server");
}
