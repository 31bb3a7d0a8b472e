/// Public task catalog
///
/// ```text
/// GET /api/tasks
/// ```
///
/// Returns every task ordered by id, no pagination.

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use spiceflow_shared::models::task::Task;

/// Lists the catalog
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list(&state.db).await?;
    Ok(Json(tasks))
}
