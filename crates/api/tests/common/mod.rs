#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gamervault_api::auth::jwt::JwtConfig;
use gamervault_api::config::ServerConfig;
use gamervault_api::router::build_app_router;
use gamervault_api::state::AppState;

pub const TEST_PASSWORD: &str = "hunter2-but-longer";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        cookie_secure: false,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            expiry_hours: 1,
        },
    }
}

/// Build the production router over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(COOKIE, format!("token={token}"));
    }
    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: serde_json::Value, token: &str) -> Response {
    send(app, request(Method::POST, uri, Some(token), Some(body))).await
}

/// POST without a body, as used by action endpoints (`/purchase`, `/unlock`).
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, request(Method::POST, uri, Some(token), None)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: serde_json::Value, token: &str) -> Response {
    send(app, request(Method::PUT, uri, Some(token), Some(body))).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The raw `Set-Cookie` header of a response, if any.
pub fn set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Extract the session token from a `Set-Cookie: token=...` header.
pub fn session_token(response: &Response) -> Option<String> {
    let header = set_cookie(response)?;
    let value = header.split(';').next()?.strip_prefix("token=")?;
    (!value.is_empty()).then(|| value.to_string())
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Register a user through the API; returns `(user_id, session_token)`.
pub async fn register_user(pool: &PgPool, name: &str) -> (i64, String) {
    let body = serde_json::json!({
        "name": name,
        "email": format!("{}@vault.test", name.to_lowercase()),
        "password": TEST_PASSWORD,
    });
    let response = post_json(build_test_app(pool.clone()), "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let token = session_token(&response).expect("register must set a session cookie");
    let json = body_json(response).await;
    (json["data"]["id"].as_i64().unwrap(), token)
}

/// Mint an NFT for the holder of `token`; returns the NFT id.
pub async fn mint_nft(
    pool: &PgPool,
    token: &str,
    name: &str,
    game: &str,
    rarity: &str,
    category: &str,
) -> i64 {
    let body = serde_json::json!({
        "name": name,
        "description": format!("{name} from {game}"),
        "image": format!("https://img.vault.test/{}.png", name.to_lowercase().replace(' ', "-")),
        "game": game,
        "rarity": rarity,
        "category": category,
    });
    let response = post_json_auth(build_test_app(pool.clone()), "/api/v1/nfts", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Put an NFT up for sale at `price`.
pub async fn list_for_sale(pool: &PgPool, token: &str, nft_id: i64, price: f64) {
    let body = serde_json::json!({ "forSale": true, "price": price });
    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/nfts/{nft_id}/listing"),
        body,
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Count activity rows of one type for a user, straight from the table.
pub async fn count_activities(pool: &PgPool, user_id: i64, activity_type: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(
        "SELECT COUNT(*)::BIGINT FROM activities WHERE user_id = $1 AND activity_type = $2",
    )
    .bind(user_id)
    .bind(activity_type)
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}
