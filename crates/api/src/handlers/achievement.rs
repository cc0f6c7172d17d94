//! Handlers for the `/achievements` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gamervault_core::error::CoreError;
use gamervault_core::nft::{self, Rarity};
use gamervault_core::types::DbId;
use gamervault_db::models::achievement::CreateAchievement;
use gamervault_db::repositories::AchievementRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::AchievementListParams;
use crate::response::{DataResponse, ListingResponse};
use crate::state::AppState;

/// Upper bound for the points an achievement can award.
const MAX_POINTS: i32 = 10_000;

/// Request body for `POST /achievements`.
#[derive(Debug, Deserialize)]
pub struct CreateAchievementRequest {
    pub name: String,
    pub description: Option<String>,
    pub game: String,
    pub points: i32,
    pub rarity: String,
    pub criteria: Option<String>,
    pub icon: Option<String>,
}

/// GET /api/v1/achievements
///
/// Public catalog with `game` / `rarity` filters, sorting and pagination.
pub async fn list_achievements(
    State(state): State<AppState>,
    Query(params): Query<AchievementListParams>,
) -> AppResult<impl IntoResponse> {
    let listing = params.parse()?;

    let data = AchievementRepo::list(
        &state.pool,
        &listing.filter,
        listing.sort,
        listing.order,
        listing.page,
    )
    .await?;
    let stats = AchievementRepo::stats(&state.pool, &listing.filter).await?;
    let pagination = listing.page.paginate(stats.total);

    Ok(Json(ListingResponse {
        data,
        stats,
        pagination,
    }))
}

/// GET /api/v1/achievements/{id}
pub async fn get_achievement(
    State(state): State<AppState>,
    Path(achievement_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let achievement = find_achievement(&state, achievement_id).await?;
    Ok(Json(DataResponse { data: achievement }))
}

/// POST /api/v1/achievements
pub async fn create_achievement(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateAchievementRequest>,
) -> AppResult<impl IntoResponse> {
    nft::validate_name(&input.name)?;
    nft::validate_description(input.description.as_deref())?;
    if input.game.trim().is_empty() {
        return Err(AppError::BadRequest("game must not be empty".into()));
    }
    if !(0..=MAX_POINTS).contains(&input.points) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "points must be between 0 and {MAX_POINTS}"
        ))));
    }
    let rarity = Rarity::from_str(&input.rarity)?;

    let created = AchievementRepo::create(
        &state.pool,
        &CreateAchievement {
            name: input.name.trim().to_string(),
            description: input.description,
            game: input.game.trim().to_string(),
            points: input.points,
            rarity: rarity.as_str().to_string(),
            criteria: input.criteria,
            icon: input.icon,
        },
    )
    .await?;

    tracing::info!(
        achievement_id = created.id,
        user_id = auth.user_id,
        "Achievement created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/achievements/unlocked
pub async fn list_unlocked(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let unlocked = AchievementRepo::list_unlocked(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: unlocked }))
}

/// POST /api/v1/achievements/{id}/unlock
///
/// Unlock an achievement for the caller and award its points. Unlocking the
/// same achievement twice is 409.
pub async fn unlock_achievement(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(achievement_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let achievement = find_achievement(&state, achievement_id).await?;
    let unlocked = AchievementRepo::unlock(&state.pool, auth.user_id, &achievement).await?;

    tracing::info!(
        achievement_id,
        user_id = auth.user_id,
        points = achievement.points,
        "Achievement unlocked"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: unlocked })))
}

async fn find_achievement(
    state: &AppState,
    achievement_id: DbId,
) -> AppResult<gamervault_db::models::achievement::Achievement> {
    AchievementRepo::find_by_id(&state.pool, achievement_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Achievement",
            id: achievement_id,
        }))
}
