//! Repository for the append-only `activities` table.

use gamervault_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::activity::{Activity, CreateActivity};

const COLUMNS: &str = "id, user_id, activity_type, title, description, metadata, created_at";

/// Appends and reads activity entries. Rows are never updated or deleted.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Append an activity entry. Accepts a pool or an open transaction.
    pub async fn create<'e, E>(executor: E, input: &CreateActivity) -> Result<Activity, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO activities (user_id, activity_type, title, description, metadata)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(input.user_id)
            .bind(input.activity_type)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.metadata)
            .fetch_one(executor)
            .await
    }

    /// List a user's activities newest first, optionally restricted to one type.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        activity_type: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities
             WHERE user_id = $1
               AND ($2::TEXT IS NULL OR activity_type = $2)
             ORDER BY created_at DESC, id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(user_id)
            .bind(activity_type)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count a user's activities with the same filter as [`Self::list_for_user`].
    pub async fn count_for_user(
        pool: &PgPool,
        user_id: DbId,
        activity_type: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*)::BIGINT FROM activities
             WHERE user_id = $1
               AND ($2::TEXT IS NULL OR activity_type = $2)",
        )
        .bind(user_id)
        .bind(activity_type)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
