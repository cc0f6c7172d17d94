//! Handler for `/leaderboard`.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gamervault_core::listing::clamp_limit;
use gamervault_core::social::{LeaderboardMetric, DEFAULT_LEADERBOARD_SIZE, MAX_LEADERBOARD_SIZE};
use gamervault_db::repositories::LeaderboardRepo;

use crate::error::AppResult;
use crate::query::LeaderboardParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/leaderboard
///
/// Top users by experience (default), unlocked achievements, or NFTs owned.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> AppResult<impl IntoResponse> {
    let metric = LeaderboardMetric::parse(params.by())?;
    let limit = clamp_limit(params.limit, DEFAULT_LEADERBOARD_SIZE, MAX_LEADERBOARD_SIZE);

    let entries = LeaderboardRepo::top(&state.pool, metric, limit).await?;
    Ok(Json(DataResponse { data: entries }))
}
