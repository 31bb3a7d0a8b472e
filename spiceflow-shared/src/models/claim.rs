/// Claim model: a user having completed a catalog task
///
/// At most one claim exists per `(user_id, task_id)`; the unique constraint
/// `claims_user_task_key` is the authority, not application checks.
///
/// # Claim flow
///
/// ```text
/// ensure user row ──► BEGIN
///                      ├─ SELECT task FOR SHARE ── none ──► ROLLBACK, TaskNotFound
///                      ├─ INSERT claim ON CONFLICT DO NOTHING
///                      │     └─ no row ──► COMMIT, AlreadyClaimed
///                      ├─ UPDATE users SET points = points + task.points
///                      └─ COMMIT, Claimed
/// ```
///
/// Two concurrent claims for the same pair serialize on the unique index: the
/// second insert waits for the first transaction and then inserts nothing, so
/// points are awarded exactly once.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE claims (
///     id BIGSERIAL PRIMARY KEY,
///     user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     task_id INTEGER NOT NULL REFERENCES tasks(id) ON DELETE CASCADE,
///     tx_hash TEXT,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     CONSTRAINT claims_user_task_key UNIQUE (user_id, task_id)
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::debug;

use super::user::User;

/// Stored claim row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Claim {
    pub id: i64,
    pub user_id: String,
    pub task_id: i32,

    /// Transaction hash submitted as proof for on-chain tasks
    pub tx_hash: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// Claim joined with the task it refers to, as shown in a user's progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ClaimedTask {
    pub task_id: i32,

    /// Task name at read time
    pub name: String,

    /// Task reward at read time
    pub points: i32,

    pub tx_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Result of a claim attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// New claim stored and points awarded
    Claimed { points_awarded: i64 },

    /// The pair was already claimed; nothing written
    AlreadyClaimed,

    /// No task with this id; nothing written
    TaskNotFound,
}

impl ClaimOutcome {
    /// Points added to the user by this attempt
    pub fn points_awarded(&self) -> i64 {
        match self {
            ClaimOutcome::Claimed { points_awarded } => *points_awarded,
            ClaimOutcome::AlreadyClaimed | ClaimOutcome::TaskNotFound => 0,
        }
    }
}

impl Claim {
    /// Claims a task for a user and awards its points once
    ///
    /// The user row is upserted first and stays even when the task turns out
    /// not to exist. Lookup, insert and point increment then run in a single
    /// transaction; any error drops the transaction and rolls it back.
    pub async fn record(
        pool: &PgPool,
        user_id: &str,
        task_id: i32,
        tx_hash: Option<&str>,
    ) -> Result<ClaimOutcome, sqlx::Error> {
        User::ensure_exists(pool, user_id).await?;

        let mut tx = pool.begin().await?;

        // Share lock keeps the task from being deleted under the insert.
        let points: Option<i32> =
            sqlx::query_scalar("SELECT points FROM tasks WHERE id = $1 FOR SHARE")
                .bind(task_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(points) = points else {
            debug!(user_id, task_id, "Claim rejected: task not found");
            return Ok(ClaimOutcome::TaskNotFound);
        };

        let inserted: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO claims (user_id, task_id, tx_hash)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, task_id) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(task_id)
        .bind(tx_hash)
        .fetch_optional(&mut *tx)
        .await?;

        if inserted.is_none() {
            tx.commit().await?;
            return Ok(ClaimOutcome::AlreadyClaimed);
        }

        let points_awarded = i64::from(points);
        User::add_points(&mut *tx, user_id, points_awarded).await?;

        tx.commit().await?;

        Ok(ClaimOutcome::Claimed { points_awarded })
    }

    /// Finds the claim for a user/task pair
    pub async fn find(
        pool: &PgPool,
        user_id: &str,
        task_id: i32,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Claim>(
            r#"
            SELECT id, user_id, task_id, tx_hash, created_at
            FROM claims
            WHERE user_id = $1 AND task_id = $2
            "#,
        )
        .bind(user_id)
        .bind(task_id)
        .fetch_optional(pool)
        .await
    }

    /// Lists a user's claims with task details, newest first
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Vec<ClaimedTask>, sqlx::Error> {
        sqlx::query_as::<_, ClaimedTask>(
            r#"
            SELECT c.task_id, t.name, t.points, c.tx_hash, c.created_at
            FROM claims c
            JOIN tasks t ON c.task_id = t.id
            WHERE c.user_id = $1
            ORDER BY c.created_at DESC, c.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_awarded_per_outcome() {
        assert_eq!(ClaimOutcome::Claimed { points_awarded: 150 }.points_awarded(), 150);
        assert_eq!(ClaimOutcome::AlreadyClaimed.points_awarded(), 0);
        assert_eq!(ClaimOutcome::TaskNotFound.points_awarded(), 0);
    }
}
