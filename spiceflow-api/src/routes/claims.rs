/// Claim endpoint
///
/// ```text
/// POST /api/claim
/// Content-Type: application/json
///
/// { "userId": "0xabc", "taskId": 1, "txHash": "0x123..." }
/// ```
///
/// ```json
/// { "message": "Task claimed", "awarded": 100 }
/// ```
///
/// Claiming the same task again answers `"Already claimed"` with
/// `awarded: 0`.
///
/// # Errors
///
/// - `400 Bad Request`: `userId` or `taskId` missing, `taskId` not an integer,
///   or a malformed JSON body
/// - `404 Not Found`: no task with this id
/// - `500 Internal Server Error`: storage failure

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::json_or_default,
};
use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};
use spiceflow_shared::models::claim::{Claim, ClaimOutcome};
use tracing::info;

/// Identifier sent either as a JSON number or a string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Number(i64),
    Text(String),
}

impl IdValue {
    /// User ids are opaque strings; numbers are taken verbatim
    ///
    /// Returns None for an empty string.
    pub fn into_user_id(self) -> Option<String> {
        match self {
            IdValue::Number(n) => Some(n.to_string()),
            IdValue::Text(s) if s.is_empty() => None,
            IdValue::Text(s) => Some(s),
        }
    }

    /// Task ids are integers; numeric strings are accepted
    ///
    /// Returns Ok(None) for an empty string.
    pub fn into_task_id(self) -> Result<Option<i32>, ApiError> {
        let invalid = || ApiError::BadRequest("taskId must be an integer".to_string());

        match self {
            IdValue::Number(n) => i32::try_from(n).map(Some).map_err(|_| invalid()),
            IdValue::Text(s) if s.is_empty() => Ok(None),
            IdValue::Text(s) => s.trim().parse::<i32>().map(Some).map_err(|_| invalid()),
        }
    }
}

/// Claim request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    pub user_id: Option<IdValue>,
    pub task_id: Option<IdValue>,

    /// Proof for on-chain tasks
    pub tx_hash: Option<String>,
}

/// Claim response
#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub message: String,

    /// Points added by this request
    pub awarded: i64,
}

/// Claims a task for a user
///
/// A missing body counts as an empty object, so it fails the field check
/// with 400. A malformed one is a 400 of its own.
pub async fn claim_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<ClaimResponse>> {
    let req: ClaimRequest = json_or_default(&headers, &body)?;

    let user_id = req.user_id.and_then(IdValue::into_user_id);
    let task_id = match req.task_id {
        Some(value) => value.into_task_id()?,
        None => None,
    };

    let (Some(user_id), Some(task_id)) = (user_id, task_id) else {
        return Err(ApiError::BadRequest(
            "userId and taskId required".to_string(),
        ));
    };

    let tx_hash = req.tx_hash.filter(|hash| !hash.is_empty());

    let outcome = Claim::record(&state.db, &user_id, task_id, tx_hash.as_deref()).await?;

    let message = match outcome {
        ClaimOutcome::Claimed { points_awarded } => {
            info!(user_id = %user_id, task_id, points_awarded, "Task claimed");
            "Task claimed"
        }
        ClaimOutcome::AlreadyClaimed => {
            info!(user_id = %user_id, task_id, "Task already claimed");
            "Already claimed"
        }
        ClaimOutcome::TaskNotFound => {
            return Err(ApiError::NotFound("task not found".to_string()));
        }
    };

    Ok(Json(ClaimResponse {
        message: message.to_string(),
        awarded: outcome.points_awarded(),
    }))
}
