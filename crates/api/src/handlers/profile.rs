//! Handlers for profiles: the caller's own (`/profile`) and public views
//! (`/users/{id}/profile`).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use gamervault_core::account;
use gamervault_core::error::CoreError;
use gamervault_core::progression;
use gamervault_core::types::DbId;
use gamervault_db::models::user::UpdateUser;
use gamervault_db::models::user_profile::{ProfileView, UpdateUserProfile};
use gamervault_db::repositories::{FriendRequestRepo, UserProfileRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /profile`. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub social_links: Option<serde_json::Value>,
}

/// GET /api/v1/profile
pub async fn get_my_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let view = load_profile(&state, auth.user_id).await?;
    Ok(Json(DataResponse { data: view }))
}

/// PUT /api/v1/profile
pub async fn update_my_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let name = input
        .name
        .as_deref()
        .map(account::validate_display_name)
        .transpose()?
        .map(str::to_string);
    if let Some(bio) = &input.bio {
        account::validate_bio(bio)?;
    }
    if let Some(links) = &input.social_links {
        account::validate_social_links(links)?;
    }

    let updated = UserRepo::update_with_profile(
        &state.pool,
        auth.user_id,
        &UpdateUser {
            name,
            avatar: input.avatar,
        },
        &UpdateUserProfile {
            bio: input.bio,
            social_links: input.social_links,
        },
    )
    .await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }));
    }

    tracing::info!(user_id = auth.user_id, "Profile updated");

    let view = load_profile(&state, auth.user_id).await?;
    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/users/{id}/profile
pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let view = load_profile(&state, user_id).await?;
    Ok(Json(DataResponse { data: view }))
}

/// Assemble the profile view: stored fields, level math, derived counts and
/// the friend list.
async fn load_profile(state: &AppState, user_id: DbId) -> AppResult<ProfileView> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        })
    };

    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(not_found)?;
    let profile = UserProfileRepo::find_by_user_id(&state.pool, user_id)
        .await?
        .ok_or_else(not_found)?;
    let counts = UserProfileRepo::counts(&state.pool, user_id).await?;
    let friends = FriendRequestRepo::list_friends(&state.pool, user_id).await?;

    Ok(ProfileView {
        user_id: user.id,
        name: user.name,
        avatar: user.avatar,
        bio: profile.bio,
        level: progression::level_for_experience(profile.experience),
        experience: profile.experience,
        experience_to_next_level: progression::experience_to_next_level(profile.experience),
        social_links: profile.social_links,
        counts,
        friends,
        member_since: user.created_at,
    })
}
