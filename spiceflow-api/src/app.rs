/// Application state and router builder
///
/// # Example
///
/// ```no_run
/// use spiceflow_api::{app::AppState, config::Config};
/// use spiceflow_shared::db::pool::create_pool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.pool_config()).await?;
/// let state = AppState::new(pool, config);
/// let app = spiceflow_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, middleware::admin::admin_auth_layer, routes};
use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, patch, post},
    Router,
};
use spiceflow_shared::auth::admin::{AdminKey, ADMIN_KEY_HEADER};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned into every handler through Axum's `State` extractor. The pool is
/// the only shared resource; it is built by the caller and injected here.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,

    /// Digest of the configured admin secret
    pub admin_key: AdminKey,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        let admin_key = AdminKey::new(&config.admin.api_key);

        Self {
            db,
            config: Arc::new(config),
            admin_key,
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// ```text
/// /api
/// ├── GET    /health
/// ├── GET    /tasks
/// ├── POST   /claim
/// ├── GET    /progress/:user_id
/// └── /admin                      # x-admin-key required
///     ├── POST   /tasks
///     ├── PATCH  /tasks/:id
///     ├── DELETE /tasks/:id
///     ├── GET    /users
///     └── PATCH  /users/:id/role
/// ```
pub fn build_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/tasks", post(routes::admin::create_task))
        .route(
            "/tasks/:id",
            patch(routes::admin::update_task).delete(routes::admin::delete_task),
        )
        .route("/users", get(routes::admin::list_users))
        .route("/users/:id/role", patch(routes::admin::set_user_role))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            admin_auth_layer,
        ));

    let api_routes = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/tasks", get(routes::tasks::list_tasks))
        .route("/claim", post(routes::claims::claim_task))
        .route("/progress/:user_id", get(routes::progress::get_progress))
        .nest("/admin", admin_routes);

    let cors = cors_layer(&state.config.api.cors_origins);

    Router::new()
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Permissive CORS for `*`, otherwise an explicit origin list
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(ADMIN_KEY_HEADER),
        ])
        .max_age(std::time::Duration::from_secs(3600))
}
