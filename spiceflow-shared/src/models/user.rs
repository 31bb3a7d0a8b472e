/// User model and database operations
///
/// Users are keyed by an opaque string (a wallet address or a handle). A row
/// is created lazily the first time a user claims a task, or by the seed tool
/// for the admin account. Users are never deleted through the API.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id TEXT PRIMARY KEY,
///     role TEXT NOT NULL DEFAULT 'user' CHECK (role IN ('admin', 'user')),
///     points BIGINT NOT NULL DEFAULT 0 CHECK (points >= 0),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use spiceflow_shared::models::user::{User, UserRole};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// User::ensure_exists(&pool, "0xabc").await?;
/// let updated = User::set_role(&pool, "0xabc", UserRole::Admin).await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};
use std::fmt;
use std::str::FromStr;

/// Role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// May manage the task catalog and user roles
    Admin,

    /// Regular participant
    #[default]
    User,
}

/// Returned when a role string is neither `admin` nor `user`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role '{0}': must be admin or user")]
pub struct InvalidRole(pub String);

impl UserRole {
    /// Converts role to its stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = InvalidRole;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "user" => Ok(UserRole::User),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}

impl TryFrom<String> for UserRole {
    type Error = InvalidRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// User row as exposed by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Opaque user identifier
    pub id: String,

    /// Current role
    #[sqlx(try_from = "String")]
    pub role: UserRole,

    /// Accumulated points
    pub points: i64,
}

impl User {
    /// Zero-valued user returned for ids that have never claimed anything
    ///
    /// Not persisted.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: UserRole::User,
            points: 0,
        }
    }

    /// Inserts the user with default role and zero points unless it already exists
    ///
    /// Returns true if a row was created.
    pub async fn ensure_exists<'e, E>(executor: E, id: &str) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, role, points)
            VALUES ($1, 'user', 0)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Creates or promotes a user with the given role and resets its points to zero
    ///
    /// Used by the seed tool for the admin account.
    pub async fn upsert_with_role(
        pool: &PgPool,
        id: &str,
        role: UserRole,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, role, points)
            VALUES ($1, $2, 0)
            ON CONFLICT (id) DO UPDATE SET role = EXCLUDED.role, points = 0
            RETURNING id, role, points
            "#,
        )
        .bind(id)
        .bind(role.as_str())
        .fetch_one(pool)
        .await
    }

    /// Finds a user by id
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, role, points FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Lists every user ordered by id
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, role, points FROM users ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Changes a user's role
    ///
    /// Returns the updated user, or None if no user has this id.
    pub async fn set_role(
        pool: &PgPool,
        id: &str,
        role: UserRole,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET role = $2
            WHERE id = $1
            RETURNING id, role, points
            "#,
        )
        .bind(id)
        .bind(role.as_str())
        .fetch_optional(pool)
        .await
    }

    /// Adds points to a user's balance
    ///
    /// Returns false if no user has this id.
    pub async fn add_points<'e, E>(executor: E, id: &str, points: i64) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("UPDATE users SET points = points + $2 WHERE id = $1")
            .bind(id)
            .bind(points)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
