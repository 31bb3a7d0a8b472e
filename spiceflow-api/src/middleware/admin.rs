/// Admin authorization gate
///
/// Layered once over the whole admin route group. It compares the
/// `x-admin-key` header with the configured secret and rejects with 401
/// before the request body is read or any handler runs.

use crate::{app::AppState, error::ApiError};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use spiceflow_shared::auth::admin::ADMIN_KEY_HEADER;
use tracing::warn;

/// Rejects requests whose admin key does not match the configured secret
pub async fn admin_auth_layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if let Err(err) = state.admin_key.verify(provided) {
        warn!(
            reason = %err,
            method = %req.method(),
            path = %req.uri().path(),
            "Admin request rejected"
        );
        return Err(err.into());
    }

    Ok(next.run(req).await)
}
