//! Leaderboard ranking queries.

use gamervault_core::social::LeaderboardMetric;
use sqlx::PgPool;

use crate::models::leaderboard::LeaderboardEntry;

pub struct LeaderboardRepo;

impl LeaderboardRepo {
    /// Top `limit` users ranked by `metric`. Ties share a rank
    /// (`RANK()` semantics) and are listed by user id.
    pub async fn top(
        pool: &PgPool,
        metric: LeaderboardMetric,
        limit: i64,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        let score = match metric {
            LeaderboardMetric::Experience => "p.experience",
            LeaderboardMetric::Achievements => {
                "(SELECT COUNT(*) FROM user_achievements ua WHERE ua.user_id = u.id)"
            }
            LeaderboardMetric::Nfts => "(SELECT COUNT(*) FROM nfts n WHERE n.owner_id = u.id)",
        };

        let query = format!(
            "SELECT RANK() OVER (ORDER BY scored.score DESC)::BIGINT AS rank,
                    scored.user_id, scored.name, scored.avatar, scored.experience, scored.score
             FROM (
                SELECT u.id AS user_id, u.name, u.avatar, p.experience,
                       ({score})::BIGINT AS score
                FROM users u
                JOIN user_profiles p ON p.user_id = u.id
             ) scored
             ORDER BY scored.score DESC, scored.user_id ASC
             LIMIT $1"
        );
        sqlx::query_as::<_, LeaderboardEntry>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
