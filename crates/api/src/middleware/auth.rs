//! The [`AuthUser`] extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use gamervault_core::types::DbId;

use crate::auth::cookie::token_from_headers;
use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The signed-in user. Adding this as a handler argument makes the route
/// require a session.
///
/// The `token` cookie is checked first, then `Authorization: Bearer`.
/// Failure is a 401 that also clears the cookie.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub email: String,
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    value.strip_prefix("Bearer ").map(|t| t.trim().to_string())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = token_from_headers(&parts.headers).or_else(|| bearer_token(&parts.headers))
        else {
            return Err(AppError::Unauthenticated("Not authenticated".into()));
        };

        match validate_token(&token, &state.config.jwt) {
            Ok(claims) => Ok(AuthUser {
                user_id: claims.sub,
                email: claims.email,
            }),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected session token");
                Err(AppError::Unauthenticated("Invalid or expired session".into()))
            }
        }
    }
}
