//! Route definitions for the `/games` catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// Routes mounted at `/games`.
///
/// ```text
/// GET  /       -> list_games
/// POST /       -> create_game (requires auth)
/// GET  /{id}   -> get_game
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(game::list_games).post(game::create_game))
        .route("/{id}", get(game::get_game))
}
