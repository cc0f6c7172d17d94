use gamervault_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::user::{CreateUser, UpdateUser, User};
use crate::models::user_profile::UpdateUserProfile;
use crate::repositories::UserProfileRepo;

const COLUMNS: &str = "id, name, email, password_hash, avatar, created_at, updated_at";

/// Accounts. Every user row has a matching `user_profiles` row.
pub struct UserRepo;

impl UserRepo {
    /// Register an account and its empty profile atomically.
    pub async fn create_with_profile(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user: User = sqlx::query_as(&format!(
            "INSERT INTO users (name, email, password_hash, avatar) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.avatar)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO user_profiles (user_id) VALUES ($1)")
            .bind(user.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(user)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as(&format!("SELECT {COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Exact match; the auth handlers lowercase emails on the way in.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as(&format!("SELECT {COLUMNS} FROM users WHERE email = $1"))
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*)::BIGINT FROM users")
            .fetch_one(pool)
            .await
    }

    /// Patch display name and avatar; `None` keeps the stored value.
    pub async fn update<'e, E>(
        executor: E,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(&format!(
            "UPDATE users \
             SET name = COALESCE($2, name), avatar = COALESCE($3, avatar) \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.avatar)
        .fetch_optional(executor)
        .await
    }

    /// Apply account and profile edits together; either both land or neither.
    /// Returns `false` when the user does not exist.
    pub async fn update_with_profile(
        pool: &PgPool,
        id: DbId,
        account: &UpdateUser,
        profile: &UpdateUserProfile,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user = Self::update(&mut *tx, id, account).await?;
        if user.is_none() {
            return Ok(false);
        }
        if profile.bio.is_some() || profile.social_links.is_some() {
            UserProfileRepo::update(&mut *tx, id, profile).await?;
        }

        tx.commit().await?;
        Ok(true)
    }
}
