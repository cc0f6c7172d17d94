//! Repository for the `friend_requests` table.
//!
//! An accepted request is the friendship itself; there is no separate
//! friends table.

use gamervault_core::activity::ActivityKind;
use gamervault_core::social::FriendRequestStatus;
use gamervault_core::types::DbId;
use sqlx::PgPool;

use super::activity_repo::ActivityRepo;
use crate::models::activity::CreateActivity;
use crate::models::social::{FriendRequest, FriendSummary, IncomingFriendRequest};

const COLUMNS: &str = "id, sender_id, receiver_id, status, created_at, updated_at";

pub struct FriendRequestRepo;

impl FriendRequestRepo {
    /// Create a pending request. While a pending or accepted request exists
    /// for the pair (in either direction), another one violates
    /// `uq_friend_requests_pair`; a declined request does not count.
    pub async fn create(
        pool: &PgPool,
        sender_id: DbId,
        receiver_id: DbId,
    ) -> Result<FriendRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO friend_requests (sender_id, receiver_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FriendRequest>(&query)
            .bind(sender_id)
            .bind(receiver_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FriendRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM friend_requests WHERE id = $1");
        sqlx::query_as::<_, FriendRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Pending requests addressed to `user_id`, oldest first.
    pub async fn list_incoming_pending(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<IncomingFriendRequest>, sqlx::Error> {
        sqlx::query_as::<_, IncomingFriendRequest>(
            "SELECT fr.id, fr.sender_id, u.name AS sender_name, u.avatar AS sender_avatar,
                    fr.created_at
             FROM friend_requests fr
             JOIN users u ON u.id = fr.sender_id
             WHERE fr.receiver_id = $1 AND fr.status = 'pending'
             ORDER BY fr.created_at ASC, fr.id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Mark a pending request declined. Returns `None` if it was not pending.
    pub async fn decline(pool: &PgPool, id: DbId) -> Result<Option<FriendRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE friend_requests SET status = $2
             WHERE id = $1 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FriendRequest>(&query)
            .bind(id)
            .bind(FriendRequestStatus::Declined.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Accept a pending request and append a `friend_added` activity for both
    /// users, all in one transaction. Returns `None` if it was not pending.
    pub async fn accept(pool: &PgPool, id: DbId) -> Result<Option<FriendRequest>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE friend_requests SET status = $2
             WHERE id = $1 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        let Some(request) = sqlx::query_as::<_, FriendRequest>(&query)
            .bind(id)
            .bind(FriendRequestStatus::Accepted.as_str())
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let names: Vec<(DbId, String)> =
            sqlx::query_as("SELECT id, name FROM users WHERE id = ANY($1)")
                .bind(vec![request.sender_id, request.receiver_id])
                .fetch_all(&mut *tx)
                .await?;
        let name_of = |user_id: DbId| {
            names
                .iter()
                .find(|(id, _)| *id == user_id)
                .map(|(_, name)| name.clone())
                .unwrap_or_default()
        };

        for (user_id, friend_id) in [
            (request.sender_id, request.receiver_id),
            (request.receiver_id, request.sender_id),
        ] {
            let activity = CreateActivity {
                user_id,
                activity_type: ActivityKind::FriendAdded.as_str(),
                title: ActivityKind::FriendAdded.title(&name_of(friend_id)),
                description: None,
                metadata: serde_json::json!({ "friendId": friend_id }),
            };
            ActivityRepo::create(&mut *tx, &activity).await?;
        }

        tx.commit().await?;
        Ok(Some(request))
    }

    /// Accepted friends of `user_id`, most recent friendship first.
    pub async fn list_friends(pool: &PgPool, user_id: DbId) -> Result<Vec<FriendSummary>, sqlx::Error> {
        sqlx::query_as::<_, FriendSummary>(
            "SELECT u.id AS user_id, u.name, u.avatar, fr.updated_at AS since
             FROM friend_requests fr
             JOIN users u
               ON u.id = CASE WHEN fr.sender_id = $1 THEN fr.receiver_id ELSE fr.sender_id END
             WHERE fr.status = 'accepted' AND (fr.sender_id = $1 OR fr.receiver_id = $1)
             ORDER BY fr.updated_at DESC, u.id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
