pub mod achievements;
pub mod activities;
pub mod auth;
pub mod games;
pub mod health;
pub mod inventory;
pub mod leaderboard;
pub mod marketplace;
pub mod nfts;
pub mod profile;
pub mod social;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                          register (public)
/// /auth/login                             login (public)
/// /auth/logout                            logout (public, clears cookie)
/// /auth/me                                current user
///
/// /marketplace                            for-sale listings (public)
/// /marketplace/{id}/purchase              buy a listed NFT (POST)
///
/// /inventory                              caller's NFTs
///
/// /nfts                                   mint (POST)
/// /nfts/{id}                              get (public)
/// /nfts/{id}/listing                      list / delist (PUT, owner only)
///
/// /achievements                           catalog (public), create (POST)
/// /achievements/unlocked                  caller's unlocks
/// /achievements/{id}                      get (public)
/// /achievements/{id}/unlock               unlock for caller (POST)
///
/// /activities                             caller's activity history
///
/// /profile                                get, update caller's profile
/// /users/{id}/profile                     public profile
///
/// /games                                  list (public), create (POST)
/// /games/{id}                             get (public)
///
/// /friends                                accepted friends
/// /friends/requests                       incoming pending, send (POST)
/// /friends/requests/{id}/accept           accept (POST, receiver only)
/// /friends/requests/{id}/decline          decline (POST, receiver only)
///
/// /posts                                  create (POST)
/// /posts/feed                             own + friends' posts
///
/// /leaderboard                            top users (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/marketplace", marketplace::router())
        .nest("/inventory", inventory::router())
        .nest("/nfts", nfts::router())
        .nest("/achievements", achievements::router())
        .nest("/activities", activities::router())
        // Own profile at /profile, public profiles at /users/{id}/profile.
        .merge(profile::router())
        .nest("/games", games::router())
        .nest("/friends", social::friends_router())
        .nest("/posts", social::posts_router())
        .nest("/leaderboard", leaderboard::router())
}
