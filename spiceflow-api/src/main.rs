//! # SpiceFlow API Server
//!
//! Serves the task catalog, claim and progress endpoints and the admin API.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgres://... ADMIN_API_KEY=... cargo run -p spiceflow-api
//! ```

use spiceflow_api::{
    app::{build_router, AppState},
    config::Config,
    telemetry,
};
use spiceflow_shared::db::{migrations::run_migrations, pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    tracing::info!(
        "SpiceFlow API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let db = pool::create_pool(config.pool_config()).await?;

    if config.database.run_migrations {
        run_migrations(&db).await?;
    }

    if config.admin.api_key.is_empty() {
        tracing::warn!("ADMIN_API_KEY is not set; admin endpoints will reject every request");
    }

    let bind_address = config.bind_address();
    let state = AppState::new(db.clone(), config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool::close_pool(db).await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received, draining connections...");
}
