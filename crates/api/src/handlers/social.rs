//! Handlers for friends and posts.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gamervault_core::error::CoreError;
use gamervault_core::social::{self, FriendRequestStatus};
use gamervault_core::types::DbId;
use gamervault_db::models::social::FriendRequest;
use gamervault_db::repositories::{FriendRequestRepo, PostRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// Request body for `POST /friends/requests`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFriendRequest {
    pub receiver_id: DbId,
}

/// Request body for `POST /posts`.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
}

// ---------------------------------------------------------------------------
// Friends
// ---------------------------------------------------------------------------

/// POST /api/v1/friends/requests
pub async fn send_friend_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SendFriendRequest>,
) -> AppResult<impl IntoResponse> {
    social::validate_friend_request(auth.user_id, input.receiver_id)?;

    if UserRepo::find_by_id(&state.pool, input.receiver_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.receiver_id,
        }));
    }

    let request = FriendRequestRepo::create(&state.pool, auth.user_id, input.receiver_id).await?;

    tracing::info!(
        request_id = request.id,
        sender_id = auth.user_id,
        receiver_id = input.receiver_id,
        "Friend request sent"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// GET /api/v1/friends/requests
///
/// Pending requests addressed to the caller.
pub async fn list_incoming_requests(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let requests = FriendRequestRepo::list_incoming_pending(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// POST /api/v1/friends/requests/{id}/accept
pub async fn accept_friend_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(request_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_pending_for_receiver(&state, request_id, auth.user_id).await?;

    let accepted = FriendRequestRepo::accept(&state.pool, request_id)
        .await?
        .ok_or_else(already_answered)?;

    tracing::info!(request_id, user_id = auth.user_id, "Friend request accepted");

    Ok(Json(DataResponse { data: accepted }))
}

/// POST /api/v1/friends/requests/{id}/decline
pub async fn decline_friend_request(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(request_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_pending_for_receiver(&state, request_id, auth.user_id).await?;

    let declined = FriendRequestRepo::decline(&state.pool, request_id)
        .await?
        .ok_or_else(already_answered)?;

    tracing::info!(request_id, user_id = auth.user_id, "Friend request declined");

    Ok(Json(DataResponse { data: declined }))
}

/// GET /api/v1/friends
pub async fn list_friends(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let friends = FriendRequestRepo::list_friends(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: friends }))
}

/// Load a request and check that `user_id` may answer it: it must exist,
/// be addressed to them, and still be pending.
async fn find_pending_for_receiver(
    state: &AppState,
    request_id: DbId,
    user_id: DbId,
) -> AppResult<FriendRequest> {
    let request = FriendRequestRepo::find_by_id(&state.pool, request_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Friend request",
            id: request_id,
        }))?;

    if request.receiver_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the receiver can answer this friend request".into(),
        )));
    }
    if FriendRequestStatus::from_str(&request.status)? != FriendRequestStatus::Pending {
        return Err(already_answered());
    }
    Ok(request)
}

fn already_answered() -> AppError {
    AppError::Core(CoreError::Conflict(
        "Friend request has already been answered".into(),
    ))
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// POST /api/v1/posts
pub async fn create_post(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePostRequest>,
) -> AppResult<impl IntoResponse> {
    social::validate_post_content(&input.content)?;

    let post = PostRepo::create(&state.pool, auth.user_id, input.content.trim()).await?;

    tracing::info!(post_id = post.id, user_id = auth.user_id, "Post created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// GET /api/v1/posts/feed
///
/// The caller's posts and their friends' posts, newest first.
pub async fn feed(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let page = params.page_request();

    let data = PostRepo::feed(&state.pool, auth.user_id, page.limit, page.offset()).await?;
    let total = PostRepo::count_feed(&state.pool, auth.user_id).await?;

    Ok(Json(PageResponse {
        data,
        pagination: page.paginate(total),
    }))
}
