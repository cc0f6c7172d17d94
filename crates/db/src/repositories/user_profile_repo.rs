//! Repository for the `user_profiles` table and derived profile counts.

use gamervault_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::user_profile::{ProfileCounts, UpdateUserProfile, UserProfile};

const COLUMNS: &str = "id, user_id, bio, experience, social_links, created_at, updated_at";

pub struct UserProfileRepo;

impl UserProfileRepo {
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE user_id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update profile fields. Only non-`None` fields in `input` are applied.
    pub async fn update<'e, E>(
        executor: E,
        user_id: DbId,
        input: &UpdateUserProfile,
    ) -> Result<Option<UserProfile>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE user_profiles SET
                bio = COALESCE($2, bio),
                social_links = COALESCE($3, social_links)
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .bind(&input.bio)
            .bind(&input.social_links)
            .fetch_optional(executor)
            .await
    }

    /// Add `points` to a user's experience. Accepts a pool or a transaction.
    pub async fn add_experience<'e, E>(executor: E, user_id: DbId, points: i64) -> Result<(), sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query("UPDATE user_profiles SET experience = experience + $2 WHERE user_id = $1")
            .bind(user_id)
            .bind(points)
            .execute(executor)
            .await?;
        Ok(())
    }

    /// Compute collection, achievement and friend counts for a user.
    pub async fn counts(pool: &PgPool, user_id: DbId) -> Result<ProfileCounts, sqlx::Error> {
        sqlx::query_as::<_, ProfileCounts>(
            "SELECT
                (SELECT COUNT(*) FROM nfts WHERE owner_id = $1)::BIGINT AS total_nfts,
                (SELECT COUNT(*) FROM nfts WHERE owner_id = $1 AND for_sale)::BIGINT AS nfts_for_sale,
                (SELECT COUNT(*) FROM user_achievements WHERE user_id = $1)::BIGINT
                    AS total_achievements,
                (SELECT COALESCE(SUM(a.points), 0)
                   FROM user_achievements ua JOIN achievements a ON a.id = ua.achievement_id
                  WHERE ua.user_id = $1)::BIGINT AS achievement_points,
                (SELECT COUNT(*) FROM friend_requests
                  WHERE status = 'accepted' AND (sender_id = $1 OR receiver_id = $1))::BIGINT
                    AS friend_count",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }
}
