/// Health check endpoint
///
/// Liveness only; it does not touch the database.
///
/// ```text
/// GET /api/health
/// ```
///
/// ```json
/// { "status": "ok", "message": "SpiceFlow API is healthy", "version": "0.1.0" }
/// ```

use axum::Json;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

/// Health check handler
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "SpiceFlow API is healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
