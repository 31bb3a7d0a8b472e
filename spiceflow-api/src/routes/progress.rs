/// User progress endpoint
///
/// ```text
/// GET /api/progress/:user_id
/// ```
///
/// ```json
/// {
///   "user": { "id": "0xabc", "role": "user", "points": 100 },
///   "claims": [
///     { "task_id": 1, "name": "Follow us on X", "points": 100,
///       "tx_hash": null, "created_at": "2025-01-03T12:00:00Z" }
///   ]
/// }
/// ```
///
/// Unknown users get a zero-valued user that is not written to the database.

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use spiceflow_shared::models::{
    claim::{Claim, ClaimedTask},
    user::User,
};

/// Progress response
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub user: User,

    /// Newest first
    pub claims: Vec<ClaimedTask>,
}

/// Returns a user's balance and claim history
pub async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ProgressResponse>> {
    let user = User::find_by_id(&state.db, &user_id)
        .await?
        .unwrap_or_else(|| User::placeholder(user_id.as_str()));

    let claims = Claim::list_for_user(&state.db, &user_id).await?;

    Ok(Json(ProgressResponse { user, claims }))
}
