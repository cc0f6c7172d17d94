//! Repository for the `posts` table and the friends feed.

use gamervault_core::activity::ActivityKind;
use gamervault_core::types::DbId;
use sqlx::PgPool;

use super::activity_repo::ActivityRepo;
use crate::models::activity::CreateActivity;
use crate::models::social::Post;

/// Feed visibility: the reader's own posts plus posts by accepted friends.
const FEED_CLAUSE: &str = "p.author_id = $1
               OR p.author_id IN (
                   SELECT CASE WHEN sender_id = $1 THEN receiver_id ELSE sender_id END
                   FROM friend_requests
                   WHERE status = 'accepted' AND (sender_id = $1 OR receiver_id = $1)
               )";

pub struct PostRepo;

impl PostRepo {
    /// Publish a post and append a `post_created` activity for the author.
    pub async fn create(pool: &PgPool, author_id: DbId, content: &str) -> Result<Post, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            "WITH inserted AS (
                INSERT INTO posts (author_id, content) VALUES ($1, $2)
                RETURNING id, author_id, content, created_at
             )
             SELECT i.id, i.author_id, u.name AS author_name, u.avatar AS author_avatar,
                    i.content, i.created_at
             FROM inserted i JOIN users u ON u.id = i.author_id",
        )
        .bind(author_id)
        .bind(content)
        .fetch_one(&mut *tx)
        .await?;

        let activity = CreateActivity {
            user_id: author_id,
            activity_type: ActivityKind::PostCreated.as_str(),
            title: ActivityKind::PostCreated.title(""),
            description: None,
            metadata: serde_json::json!({ "postId": post.id }),
        };
        ActivityRepo::create(&mut *tx, &activity).await?;

        tx.commit().await?;
        Ok(post)
    }

    /// One page of `user_id`'s feed, newest first.
    pub async fn feed(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT p.id, p.author_id, u.name AS author_name, u.avatar AS author_avatar,
                    p.content, p.created_at
             FROM posts p JOIN users u ON u.id = p.author_id
             WHERE {FEED_CLAUSE}
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn count_feed(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*)::BIGINT FROM posts p WHERE {FEED_CLAUSE}");
        let row: (i64,) = sqlx::query_as(&query).bind(user_id).fetch_one(pool).await?;
        Ok(row.0)
    }
}
