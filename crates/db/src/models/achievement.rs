//! Achievement catalog and per-user unlock models.

use gamervault_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `achievements` table. Catalog entries are independent of
/// any user.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub game: String,
    pub points: i32,
    pub rarity: String,
    pub criteria: Option<String>,
    pub icon: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a catalog entry.
#[derive(Debug)]
pub struct CreateAchievement {
    pub name: String,
    pub description: Option<String>,
    pub game: String,
    pub points: i32,
    pub rarity: String,
    pub criteria: Option<String>,
    pub icon: Option<String>,
}

/// Filter for catalog listings.
#[derive(Debug, Clone, Default)]
pub struct AchievementFilter {
    pub game: Option<String>,
    pub rarity: Option<String>,
}

/// A row from the `user_achievements` join table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAchievement {
    pub id: DbId,
    pub user_id: DbId,
    pub achievement_id: DbId,
    pub unlocked_at: Timestamp,
}

/// A catalog entry joined with the time the user unlocked it.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockedAchievement {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub achievement: Achievement,
    pub unlocked_at: Timestamp,
}
