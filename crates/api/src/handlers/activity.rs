//! Handler for `/activities`: the caller's activity history.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gamervault_core::activity::ActivityKind;
use gamervault_core::listing::PageRequest;
use gamervault_db::repositories::ActivityRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::ActivityListParams;
use crate::response::PageResponse;
use crate::state::AppState;

/// GET /api/v1/activities
///
/// Newest first. `?type=` narrows to one activity kind; unknown kinds are 400.
pub async fn list_activities(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ActivityListParams>,
) -> AppResult<impl IntoResponse> {
    let kind = params
        .activity_type()
        .map(ActivityKind::from_str)
        .transpose()?;
    let activity_type = kind.as_ref().map(ActivityKind::as_str);
    let page = PageRequest::new(params.page, params.limit);

    let data = ActivityRepo::list_for_user(
        &state.pool,
        auth.user_id,
        activity_type,
        page.limit,
        page.offset(),
    )
    .await?;
    let total = ActivityRepo::count_for_user(&state.pool, auth.user_id, activity_type).await?;

    Ok(Json(PageResponse {
        data,
        pagination: page.paginate(total),
    }))
}
