//! HTTP-level integration tests for friend requests, posts and the feed.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, count_activities, get_auth, post_auth, post_json_auth,
    register_user,
};
use sqlx::PgPool;

async fn send_request(pool: &PgPool, token: &str, receiver_id: i64) -> axum::response::Response {
    post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/friends/requests",
        serde_json::json!({ "receiverId": receiver_id }),
        token,
    )
    .await
}

async fn make_friends(pool: &PgPool, a: &str, b_id: i64, b: &str) {
    let response = send_request(pool, a, b_id).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let request_id = body_json(response).await["data"]["id"].as_i64().unwrap();
    let accepted = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/friends/requests/{request_id}/accept"),
        b,
    )
    .await;
    assert_eq!(accepted.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn accepted_request_makes_both_users_friends(pool: PgPool) {
    let (ana_id, ana) = register_user(&pool, "Ana").await;
    let (ben_id, ben) = register_user(&pool, "Ben").await;

    let sent = send_request(&pool, &ana, ben_id).await;
    assert_eq!(sent.status(), StatusCode::CREATED);
    let request_id = body_json(sent).await["data"]["id"].as_i64().unwrap();

    let incoming = body_json(get_auth(build_test_app(pool.clone()), "/api/v1/friends/requests", &ben).await).await;
    assert_eq!(incoming["data"][0]["senderId"], ana_id);
    assert_eq!(incoming["data"][0]["senderName"], "Ana");

    let accepted = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/friends/requests/{request_id}/accept"),
        &ben,
    )
    .await;
    assert_eq!(accepted.status(), StatusCode::OK);
    assert_eq!(body_json(accepted).await["data"]["status"], "accepted");

    let ana_friends = body_json(get_auth(build_test_app(pool.clone()), "/api/v1/friends", &ana).await).await;
    let ben_friends = body_json(get_auth(build_test_app(pool.clone()), "/api/v1/friends", &ben).await).await;
    assert_eq!(ana_friends["data"][0]["userId"], ben_id);
    assert_eq!(ben_friends["data"][0]["userId"], ana_id);

    assert_eq!(count_activities(&pool, ana_id, "friend_added").await, 1);
    assert_eq!(count_activities(&pool, ben_id, "friend_added").await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn self_request_is_rejected(pool: PgPool) {
    let (me_id, me) = register_user(&pool, "Solo").await;

    let response = send_request(&pool, &me, me_id).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_request_in_either_direction_is_conflict(pool: PgPool) {
    let (cy_id, cy) = register_user(&pool, "Cy").await;
    let (di_id, di) = register_user(&pool, "Di").await;

    assert_eq!(send_request(&pool, &cy, di_id).await.status(), StatusCode::CREATED);
    assert_eq!(send_request(&pool, &cy, di_id).await.status(), StatusCode::CONFLICT);
    assert_eq!(send_request(&pool, &di, cy_id).await.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn request_to_unknown_user_is_not_found(pool: PgPool) {
    let (_, token) = register_user(&pool, "Lonely").await;

    let response = send_request(&pool, &token, 987654).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_receiver_can_answer_and_only_once(pool: PgPool) {
    let (_, eve) = register_user(&pool, "Eve").await;
    let (fay_id, fay) = register_user(&pool, "Fay").await;

    let sent = send_request(&pool, &eve, fay_id).await;
    let request_id = body_json(sent).await["data"]["id"].as_i64().unwrap();

    let by_sender = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/friends/requests/{request_id}/accept"),
        &eve,
    )
    .await;
    assert_eq!(by_sender.status(), StatusCode::FORBIDDEN);

    let declined = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/friends/requests/{request_id}/decline"),
        &fay,
    )
    .await;
    assert_eq!(declined.status(), StatusCode::OK);
    assert_eq!(body_json(declined).await["data"]["status"], "declined");

    let again = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/friends/requests/{request_id}/accept"),
        &fay,
    )
    .await;
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let friends = body_json(get_auth(build_test_app(pool), "/api/v1/friends", &fay).await).await;
    assert!(friends["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn declined_pair_may_send_a_new_request(pool: PgPool) {
    let (kai_id, kai) = register_user(&pool, "Kai").await;
    let (lux_id, lux) = register_user(&pool, "Lux").await;

    let first = send_request(&pool, &kai, lux_id).await;
    let first_id = body_json(first).await["data"]["id"].as_i64().unwrap();
    let declined = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/friends/requests/{first_id}/decline"),
        &lux,
    )
    .await;
    assert_eq!(declined.status(), StatusCode::OK);

    let retry = send_request(&pool, &lux, kai_id).await;
    assert_eq!(retry.status(), StatusCode::CREATED);

    let while_pending = send_request(&pool, &kai, lux_id).await;
    assert_eq!(while_pending.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn feed_shows_own_and_friends_posts_newest_first(pool: PgPool) {
    let (_, gus) = register_user(&pool, "Gus").await;
    let (hal_id, hal) = register_user(&pool, "Hal").await;
    let (_, ivy) = register_user(&pool, "Ivy").await;
    make_friends(&pool, &gus, hal_id, &hal).await;

    for (token, content) in [
        (&gus, "gus first"),
        (&hal, "hal speaks"),
        (&ivy, "ivy is a stranger"),
        (&gus, "gus again"),
    ] {
        let response = post_json_auth(
            build_test_app(pool.clone()),
            "/api/v1/posts",
            serde_json::json!({ "content": content }),
            token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let feed = body_json(get_auth(build_test_app(pool.clone()), "/api/v1/posts/feed", &gus).await).await;
    let contents: Vec<&str> = feed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["gus again", "hal speaks", "gus first"]);
    assert_eq!(feed["pagination"]["total"], 3);

    let paged = body_json(
        get_auth(build_test_app(pool), "/api/v1/posts/feed?limit=1&page=2", &gus).await,
    )
    .await;
    assert_eq!(paged["data"][0]["content"], "hal speaks");
    assert_eq!(paged["pagination"]["totalPages"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_post_is_rejected(pool: PgPool) {
    let (_, token) = register_user(&pool, "Quiet").await;

    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/posts",
        serde_json::json!({ "content": "   " }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
