//! Leaderboard row model.

use gamervault_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One ranked user on a leaderboard.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub user_id: DbId,
    pub name: String,
    pub avatar: Option<String>,
    pub experience: i64,
    /// Value of the ranking metric.
    pub score: i64,
}
