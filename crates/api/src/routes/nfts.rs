//! Route definitions for the `/nfts` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::nft;
use crate::state::AppState;

/// Routes mounted at `/nfts`.
///
/// ```text
/// POST /               -> mint_nft (requires auth)
/// GET  /{id}           -> get_nft
/// PUT  /{id}/listing   -> update_listing (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(nft::mint_nft))
        .route("/{id}", get(nft::get_nft))
        .route("/{id}/listing", put(nft::update_listing))
}
