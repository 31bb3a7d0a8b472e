/// User management
///
/// # Endpoints
///
/// - `GET /api/admin/users` - List users ordered by id
/// - `PATCH /api/admin/users/:id/role` - Set a user's role

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::json_or_default,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use spiceflow_shared::models::user::{User, UserRole};
use tracing::info;

/// Set role request
#[derive(Debug, Default, Deserialize)]
pub struct SetRoleRequest {
    /// Must be exactly `admin` or `user`
    pub role: Option<String>,
}

/// Lists every user
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;
    Ok(Json(users))
}

/// Sets a user's role
///
/// ```text
/// PATCH /api/admin/users/:id/role
/// x-admin-key: <secret>
///
/// { "role": "admin" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: role is not exactly `admin` or `user`, or the body is
///   malformed
/// - `401 Unauthorized`: admin key missing or wrong
/// - `404 Not Found`: no user with this id
pub async fn set_user_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<User>> {
    let req: SetRoleRequest = json_or_default(&headers, &body)?;

    let role = parse_role(req.role.as_deref())?;

    let user = User::set_role(&state.db, &id, role)
        .await?
        .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

    info!(user_id = %user.id, role = %user.role, "User role changed");

    Ok(Json(user))
}

fn parse_role(raw: Option<&str>) -> Result<UserRole, ApiError> {
    raw.and_then(|role| role.parse().ok())
        .ok_or_else(|| ApiError::BadRequest("role must be admin|user".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role(Some("admin")).unwrap(), UserRole::Admin);
        assert_eq!(parse_role(Some("user")).unwrap(), UserRole::User);
        assert!(parse_role(Some("ADMIN")).is_err());
        assert!(parse_role(Some("moderator")).is_err());
        assert!(parse_role(None).is_err());
    }
}
