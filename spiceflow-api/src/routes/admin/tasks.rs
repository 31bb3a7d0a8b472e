/// Catalog management
///
/// # Endpoints
///
/// - `POST /api/admin/tasks` - Create task
/// - `PATCH /api/admin/tasks/:id` - Update the supplied fields of a task
/// - `DELETE /api/admin/tasks/:id` - Delete task (its claims go with it)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::json_or_default,
};
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use spiceflow_shared::models::task::{
    CreateTask, Task, UpdateTask, DEFAULT_TASK_POINTS, DEFAULT_TASK_TYPE,
};
use tracing::info;
use validator::Validate;

/// Task fields accepted by create and update
///
/// On create only `name` is required; on update every field is optional and
/// absent or null fields keep their stored value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TaskFieldsRequest {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50, message = "type must be 1-50 characters"))]
    pub kind: Option<String>,

    #[validate(range(min = 0, message = "points must be non-negative"))]
    pub points: Option<i32>,

    #[validate(length(max = 2048, message = "href must be at most 2048 characters"))]
    pub href: Option<String>,

    pub description: Option<String>,
}

/// Delete task response
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTaskResponse {
    /// Rows removed (0 or 1)
    pub deleted: u64,
}

/// Creates a task
///
/// ```text
/// POST /api/admin/tasks
/// x-admin-key: <secret>
///
/// { "name": "Follow us on X", "type": "social", "points": 100,
///   "href": "https://x.com/spicenetio", "description": "Follow @spicenetio" }
/// ```
///
/// `type` defaults to `social` and `points` to 100.
///
/// # Errors
///
/// - `400 Bad Request`: name missing, malformed body, or a field fails
///   validation
/// - `401 Unauthorized`: admin key missing or wrong
pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Task>> {
    let req: TaskFieldsRequest = json_or_default(&headers, &body)?;

    let Some(name) = req.name.clone().filter(|name| !name.is_empty()) else {
        return Err(ApiError::BadRequest("name is required".to_string()));
    };

    req.validate()?;

    let task = Task::create(
        &state.db,
        CreateTask {
            name,
            kind: req.kind.unwrap_or_else(|| DEFAULT_TASK_TYPE.to_string()),
            points: req.points.unwrap_or(DEFAULT_TASK_POINTS),
            href: req.href,
            description: req.description,
        },
    )
    .await?;

    info!(task_id = task.id, name = %task.name, points = task.points, "Task created");

    Ok(Json(task))
}

/// Updates the supplied fields of a task
///
/// ```text
/// PATCH /api/admin/tasks/:id
/// x-admin-key: <secret>
///
/// { "points": 50 }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: id not an integer, malformed body, or a supplied field
///   fails validation
/// - `401 Unauthorized`: admin key missing or wrong
/// - `404 Not Found`: no task with this id
pub async fn update_task(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Task>> {
    let Path(id) = path?;
    let req: TaskFieldsRequest = json_or_default(&headers, &body)?;
    req.validate()?;

    let update = UpdateTask {
        name: req.name,
        kind: req.kind,
        points: req.points,
        href: req.href,
        description: req.description,
    };

    let task = Task::update(&state.db, id, update)
        .await?
        .ok_or_else(|| ApiError::NotFound("task not found".to_string()))?;

    info!(task_id = task.id, "Task updated");

    Ok(Json(task))
}

/// Deletes a task
///
/// ```text
/// DELETE /api/admin/tasks/:id
/// x-admin-key: <secret>
/// ```
///
/// Answers `{"deleted": 0}` when the task did not exist, and 400 when the id
/// is not an integer.
pub async fn delete_task(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<DeleteTaskResponse>> {
    let Path(id) = path?;
    let deleted = Task::delete(&state.db, id).await?;

    info!(task_id = id, deleted, "Task delete requested");

    Ok(Json(DeleteTaskResponse { deleted }))
}
