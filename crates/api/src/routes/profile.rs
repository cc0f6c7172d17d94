//! Route definitions for profiles.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Profile routes, merged at the API root.
///
/// ```text
/// GET /profile              -> get_my_profile
/// PUT /profile              -> update_my_profile
/// GET /users/{id}/profile   -> get_user_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(profile::get_my_profile).put(profile::update_my_profile),
        )
        .route("/users/{id}/profile", get(profile::get_user_profile))
}
