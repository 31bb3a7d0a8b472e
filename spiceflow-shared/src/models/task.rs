/// Task catalog model and database operations
///
/// A task is an action a user can perform for a point reward (follow an
/// account, send a testnet transaction, ...). The catalog is managed by
/// admins; users only read it and claim entries from it.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id SERIAL PRIMARY KEY,
///     name TEXT NOT NULL,
///     type TEXT NOT NULL DEFAULT 'social',
///     points INTEGER NOT NULL DEFAULT 100 CHECK (points >= 0),
///     href TEXT,
///     description TEXT,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use spiceflow_shared::models::task::{CreateTask, Task, UpdateTask};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let task = Task::create(&pool, CreateTask::named("Follow us on X")).await?;
///
/// let update = UpdateTask {
///     points: Some(50),
///     ..Default::default()
/// };
/// Task::update(&pool, task.id, update).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Task type used when none is given
pub const DEFAULT_TASK_TYPE: &str = "social";

/// Reward used when none is given
pub const DEFAULT_TASK_POINTS: i32 = 100;

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Auto-assigned identifier
    pub id: i32,

    /// Display name
    pub name: String,

    /// Free-form category, e.g. `social`, `tx`, `special`
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,

    /// Reward for claiming the task
    pub points: i32,

    /// External link the user follows to perform the task
    pub href: Option<String>,

    /// Longer explanation shown to the user
    pub description: Option<String>,

    /// When the task was added to the catalog
    pub created_at: DateTime<Utc>,
}

/// Input for creating a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTask {
    pub name: String,
    pub kind: String,
    pub points: i32,
    pub href: Option<String>,
    pub description: Option<String>,
}

impl CreateTask {
    /// Task with the given name and default type and reward
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DEFAULT_TASK_TYPE.to_string(),
            points: DEFAULT_TASK_POINTS,
            href: None,
            description: None,
        }
    }
}

/// Partial update; None keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub points: Option<i32>,
    pub href: Option<String>,
    pub description: Option<String>,
}

impl Task {
    /// Inserts a new task and returns the stored row
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (name, type, points, href, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, type, points, href, description, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.kind)
        .bind(data.points)
        .bind(data.href)
        .bind(data.description)
        .fetch_one(pool)
        .await
    }

    /// Finds a task by id
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, name, type, points, href, description, created_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Finds a task by exact name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, name, type, points, href, description, created_at
            FROM tasks
            WHERE name = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    /// Lists the whole catalog ordered by id
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, name, type, points, href, description, created_at
            FROM tasks
            ORDER BY id ASC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Applies a partial update
    ///
    /// Fields left as None keep their stored value. Returns None if no task
    /// has this id.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks SET
                name = COALESCE($2, name),
                type = COALESCE($3, type),
                points = COALESCE($4, points),
                href = COALESCE($5, href),
                description = COALESCE($6, description)
            WHERE id = $1
            RETURNING id, name, type, points, href, description, created_at
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.kind)
        .bind(data.points)
        .bind(data.href)
        .bind(data.description)
        .fetch_optional(pool)
        .await
    }

    /// Deletes a task; its claims go with it
    ///
    /// Returns the number of rows removed (0 or 1).
    pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
