//! # SpiceFlow seed tool
//!
//! Creates the database if needed, applies migrations, then upserts the admin
//! account and the launch task catalog. Safe to run repeatedly.
//!
//! ```bash
//! DATABASE_URL=postgres://... ADMIN_ID=softalpha cargo run -p spiceflow-api --bin spiceflow-seed
//! ```

use spiceflow_api::{config::Config, telemetry};
use spiceflow_shared::db::{
    migrations::{ensure_database_exists, get_migration_status, run_migrations},
    pool,
    seed::{seed, DEFAULT_ADMIN_ID},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = Config::from_env()?;
    let admin_id = std::env::var("ADMIN_ID").unwrap_or_else(|_| DEFAULT_ADMIN_ID.to_string());

    ensure_database_exists(&config.database.url).await?;

    let db = pool::create_pool(config.pool_config()).await?;

    run_migrations(&db).await?;
    let status = get_migration_status(&db).await?;
    tracing::info!(
        applied_migrations = status.applied_migrations,
        latest_version = ?status.latest_version,
        "Schema ready"
    );

    let report = seed(&db, &admin_id).await?;
    tracing::info!(
        admin = %report.admin.id,
        tasks_inserted = report.tasks_inserted,
        tasks_total = report.tasks_total,
        "Seeding complete"
    );

    pool::close_pool(db).await;
    Ok(())
}
