use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth::{login, logout, me, register};
use crate::state::AppState;

/// Session endpoints under `/auth`. Only `/me` needs a session.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}
