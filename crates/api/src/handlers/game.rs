//! Handlers for the `/games` catalog.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gamervault_core::error::CoreError;
use gamervault_core::nft;
use gamervault_core::types::DbId;
use gamervault_db::models::game::CreateGame;
use gamervault_db::repositories::GameRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::GameListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/games
///
/// All games by name, optionally narrowed with `?genre=`.
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<GameListParams>,
) -> AppResult<impl IntoResponse> {
    let games = GameRepo::list(&state.pool, params.genre()).await?;
    Ok(Json(DataResponse { data: games }))
}

/// GET /api/v1/games/{id}
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let game = GameRepo::find_by_id(&state.pool, game_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Game",
            id: game_id,
        }))?;
    Ok(Json(DataResponse { data: game }))
}

/// POST /api/v1/games
///
/// Duplicate names are rejected with 409 by `uq_games_name`.
pub async fn create_game(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateGame>,
) -> AppResult<impl IntoResponse> {
    nft::validate_name(&input.name)?;
    input.name = input.name.trim().to_string();
    input.genres.retain(|g| !g.trim().is_empty());

    let game = GameRepo::create(&state.pool, &input).await?;

    tracing::info!(game_id = game.id, user_id = auth.user_id, "Game created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: game })))
}
