use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let report = HealthResponse::new(gamervault_db::health_check(&state.pool).await.is_ok());
    if !report.db_healthy {
        tracing::warn!("Database unreachable during health check");
    }
    Json(report)
}

/// `GET /health`, served outside the versioned API prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
