//! Route definitions for the `/marketplace` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::marketplace;
use crate::state::AppState;

/// Routes mounted at `/marketplace`.
///
/// ```text
/// GET  /                -> list_marketplace
/// POST /{id}/purchase   -> purchase (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(marketplace::list_marketplace))
        .route("/{id}/purchase", post(marketplace::purchase))
}
