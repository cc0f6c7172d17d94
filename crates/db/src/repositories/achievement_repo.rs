//! Repository for the `achievements` catalog and `user_achievements` unlocks.

use gamervault_core::activity::ActivityKind;
use gamervault_core::listing::{AchievementSortKey, PageRequest, SortOrder};
use gamervault_core::types::DbId;
use sqlx::PgPool;

use super::activity_repo::ActivityRepo;
use super::user_profile_repo::UserProfileRepo;
use super::RARITY_RANK_SQL;
use crate::models::achievement::{
    Achievement, AchievementFilter, CreateAchievement, UnlockedAchievement, UserAchievement,
};
use crate::models::activity::CreateActivity;
use crate::models::listing::{BucketRow, ListingStats};

const COLUMNS: &str =
    "id, name, description, game, points, rarity, criteria, icon, created_at, updated_at";

fn order_clause(key: AchievementSortKey, order: SortOrder) -> String {
    let column = match key {
        AchievementSortKey::CreatedAt => "created_at",
        AchievementSortKey::Points => "points",
        AchievementSortKey::Name => "name",
        AchievementSortKey::Rarity => RARITY_RANK_SQL,
    };
    let dir = order.as_sql();
    format!("{column} {dir}, id {dir}")
}

/// Provides catalog listing and unlock operations for achievements.
pub struct AchievementRepo;

impl AchievementRepo {
    /// Insert a catalog entry.
    pub async fn create(pool: &PgPool, input: &CreateAchievement) -> Result<Achievement, sqlx::Error> {
        let query = format!(
            "INSERT INTO achievements (name, description, game, points, rarity, criteria, icon)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.game)
            .bind(input.points)
            .bind(&input.rarity)
            .bind(&input.criteria)
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Achievement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM achievements WHERE id = $1");
        sqlx::query_as::<_, Achievement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Return one page of catalog entries matching `filter`.
    pub async fn list(
        pool: &PgPool,
        filter: &AchievementFilter,
        sort: AchievementSortKey,
        order: SortOrder,
        page: PageRequest,
    ) -> Result<Vec<Achievement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM achievements
             WHERE ($1::TEXT IS NULL OR game = $1)
               AND ($2::TEXT IS NULL OR rarity = $2)
             ORDER BY {order}
             LIMIT $3 OFFSET $4",
            order = order_clause(sort, order),
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(filter.game.as_deref())
            .bind(filter.rarity.as_deref())
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count catalog entries matching `filter` by rarity and game.
    pub async fn stats(pool: &PgPool, filter: &AchievementFilter) -> Result<ListingStats, sqlx::Error> {
        let rows = sqlx::query_as::<_, BucketRow>(
            "SELECT
                CASE WHEN GROUPING(rarity) = 0 THEN rarity END AS rarity,
                CASE WHEN GROUPING(game) = 0 THEN game END AS game,
                NULL::TEXT AS category,
                COUNT(*)::BIGINT AS count
             FROM achievements
             WHERE ($1::TEXT IS NULL OR game = $1)
               AND ($2::TEXT IS NULL OR rarity = $2)
             GROUP BY GROUPING SETS ((rarity), (game), ())",
        )
        .bind(filter.game.as_deref())
        .bind(filter.rarity.as_deref())
        .fetch_all(pool)
        .await?;
        Ok(ListingStats::from_rows(rows, false))
    }

    /// Achievements a user has unlocked, most recent first.
    pub async fn list_unlocked(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UnlockedAchievement>, sqlx::Error> {
        sqlx::query_as::<_, UnlockedAchievement>(
            "SELECT a.id, a.name, a.description, a.game, a.points, a.rarity, a.criteria, a.icon,
                    a.created_at, a.updated_at, ua.unlocked_at
             FROM user_achievements ua
             JOIN achievements a ON a.id = ua.achievement_id
             WHERE ua.user_id = $1
             ORDER BY ua.unlocked_at DESC, a.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Record that `user_id` unlocked `achievement`.
    ///
    /// In one transaction: insert the join row, add the achievement's points
    /// to the user's experience, and append an `achievement_unlocked`
    /// activity. A repeat unlock violates
    /// `uq_user_achievements_user_achievement` and rolls everything back.
    pub async fn unlock(
        pool: &PgPool,
        user_id: DbId,
        achievement: &Achievement,
    ) -> Result<UserAchievement, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let unlocked = sqlx::query_as::<_, UserAchievement>(
            "INSERT INTO user_achievements (user_id, achievement_id)
             VALUES ($1, $2)
             RETURNING id, user_id, achievement_id, unlocked_at",
        )
        .bind(user_id)
        .bind(achievement.id)
        .fetch_one(&mut *tx)
        .await?;

        UserProfileRepo::add_experience(&mut *tx, user_id, i64::from(achievement.points)).await?;

        let activity = CreateActivity {
            user_id,
            activity_type: ActivityKind::AchievementUnlocked.as_str(),
            title: ActivityKind::AchievementUnlocked.title(&achievement.name),
            description: Some(format!("+{} points in {}", achievement.points, achievement.game)),
            metadata: serde_json::json!({
                "achievementId": achievement.id,
                "points": achievement.points,
                "rarity": achievement.rarity,
            }),
        };
        ActivityRepo::create(&mut *tx, &activity).await?;

        tx.commit().await?;
        Ok(unlocked)
    }
}
