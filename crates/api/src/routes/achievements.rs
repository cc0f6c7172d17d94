//! Route definitions for the `/achievements` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::achievement;
use crate::state::AppState;

/// Routes mounted at `/achievements`.
///
/// ```text
/// GET  /               -> list_achievements
/// POST /               -> create_achievement (requires auth)
/// GET  /unlocked       -> list_unlocked (requires auth)
/// GET  /{id}           -> get_achievement
/// POST /{id}/unlock    -> unlock_achievement (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(achievement::list_achievements).post(achievement::create_achievement),
        )
        .route("/unlocked", get(achievement::list_unlocked))
        .route("/{id}", get(achievement::get_achievement))
        .route("/{id}/unlock", post(achievement::unlock_achievement))
}
