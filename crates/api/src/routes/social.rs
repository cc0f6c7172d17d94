//! Route definitions for friends and posts.
//!
//! Two routers are provided:
//! - `friends_router()` mounted at `/friends`
//! - `posts_router()` mounted at `/posts`

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::social;
use crate::state::AppState;

/// Routes mounted at `/friends`.
///
/// ```text
/// GET  /                         -> list_friends
/// GET  /requests                 -> list_incoming_requests
/// POST /requests                 -> send_friend_request
/// POST /requests/{id}/accept     -> accept_friend_request
/// POST /requests/{id}/decline    -> decline_friend_request
/// ```
pub fn friends_router() -> Router<AppState> {
    Router::new()
        .route("/", get(social::list_friends))
        .route(
            "/requests",
            get(social::list_incoming_requests).post(social::send_friend_request),
        )
        .route("/requests/{id}/accept", post(social::accept_friend_request))
        .route("/requests/{id}/decline", post(social::decline_friend_request))
}

/// Routes mounted at `/posts`.
///
/// ```text
/// POST /       -> create_post
/// GET  /feed   -> feed
/// ```
pub fn posts_router() -> Router<AppState> {
    Router::new()
        .route("/", post(social::create_post))
        .route("/feed", get(social::feed))
}
