//! User profile model: stored social fields plus stats derived on read.

use gamervault_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::social::FriendSummary;

/// A row from the `user_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub bio: Option<String>,
    pub experience: i64,
    pub social_links: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Aggregate counts computed from the nfts, user_achievements and
/// friend_requests tables.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCounts {
    pub total_nfts: i64,
    pub nfts_for_sale: i64,
    pub total_achievements: i64,
    pub achievement_points: i64,
    pub friend_count: i64,
}

/// Profile as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub user_id: DbId,
    pub name: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub level: i64,
    pub experience: i64,
    pub experience_to_next_level: i64,
    pub social_links: serde_json::Value,
    #[serde(flatten)]
    pub counts: ProfileCounts,
    pub friends: Vec<FriendSummary>,
    pub member_since: Timestamp,
}

/// DTO for updating profile fields. All fields are optional.
#[derive(Debug, Default)]
pub struct UpdateUserProfile {
    pub bio: Option<String>,
    pub social_links: Option<serde_json::Value>,
}
