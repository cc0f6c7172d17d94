//! Friend request and post models.

use gamervault_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `friend_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequest {
    pub id: DbId,
    pub sender_id: DbId,
    pub receiver_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Incoming request joined with the sender's public fields.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingFriendRequest {
    pub id: DbId,
    pub sender_id: DbId,
    pub sender_name: String,
    pub sender_avatar: Option<String>,
    pub created_at: Timestamp,
}

/// A friend as listed on a profile.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendSummary {
    pub user_id: DbId,
    pub name: String,
    pub avatar: Option<String>,
    pub since: Timestamp,
}

/// A post joined with its author's public fields.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: DbId,
    pub author_id: DbId,
    pub author_name: String,
    pub author_avatar: Option<String>,
    pub content: String,
    pub created_at: Timestamp,
}
