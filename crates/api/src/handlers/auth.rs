//! Handlers for the `/auth` resource (register, login, logout, me).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gamervault_core::error::CoreError;
use gamervault_db::models::user::{CreateUser, UserResponse};
use gamervault_db::repositories::UserRepo;
use gamervault_core::account::validate_display_name;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_credentials};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Message shared by every failed login so responses never reveal whether
/// an email is registered.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "display_name_rule"))]
    pub name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar: Option<String>,
}

/// Names are judged after trimming, the same way `PUT /profile` does.
fn display_name_rule(name: &str) -> Result<(), ValidationError> {
    validate_display_name(name)
        .map(|_| ())
        .map_err(|e| ValidationError::new("display_name").with_message(e.to_string().into()))
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Validate input, create the user and an empty profile, and start a session.
/// Returns 201 with the public user and sets the session cookie.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let email = normalize_email(&input.email);
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create_with_profile(
        &state.pool,
        &CreateUser {
            name: input.name.trim().to_string(),
            email,
            password_hash,
            avatar: input.avatar,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    let cookie = issue_session_cookie(&state, user.id, &user.email)?;
    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, cookie)],
        Json(DataResponse {
            data: UserResponse::from(user),
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Verify email + password and start a session. Unknown emails and wrong
/// passwords produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let email = normalize_email(&input.email);

    let found = UserRepo::find_by_email(&state.pool, &email).await?;

    // Unknown emails still go through argon2 so both failures cost the same.
    let password_valid =
        verify_credentials(&input.password, found.as_ref().map(|u| u.password_hash.as_str()))
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    let user = match found {
        Some(user) if password_valid => user,
        found => {
            tracing::info!(user_id = found.map(|u| u.id), "Failed login attempt");
            return Err(AppError::Core(CoreError::Unauthorized(
                INVALID_CREDENTIALS.into(),
            )));
        }
    };

    tracing::info!(user_id = user.id, "User logged in");

    let cookie = issue_session_cookie(&state, user.id, &user.email)?;
    Ok((
        [(SET_COOKIE, cookie)],
        Json(DataResponse {
            data: UserResponse::from(user),
        }),
    ))
}

/// POST /api/v1/auth/logout
///
/// Clear the session cookie. Works with or without a valid session.
pub async fn logout() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, [(SET_COOKIE, clear_session_cookie())])
}

/// GET /api/v1/auth/me
///
/// Return the user behind the current session. A token for a user that no
/// longer exists is treated as an invalid session.
pub async fn me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthenticated("User no longer exists".into()))?;

    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Sign a session token and wrap it in a `Set-Cookie` header value.
fn issue_session_cookie(
    state: &AppState,
    user_id: i64,
    email: &str,
) -> AppResult<axum::http::HeaderValue> {
    let token = generate_token(user_id, email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    session_cookie(
        &token,
        state.config.jwt.expiry_secs(),
        state.config.cookie_secure,
    )
    .map_err(|e| AppError::InternalError(format!("Invalid session cookie: {e}")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use gamervault_core::account::MIN_PASSWORD_LENGTH;

    use super::*;

    fn request(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            avatar: None,
        }
    }

    #[test]
    fn password_minimum_matches_account_rules() {
        let at_min = "p".repeat(MIN_PASSWORD_LENGTH);
        let below_min = "p".repeat(MIN_PASSWORD_LENGTH - 1);
        assert!(request("Ada", "ada@vault.gg", &at_min).validate().is_ok());
        assert!(request("Ada", "ada@vault.gg", &below_min).validate().is_err());
    }

    #[test]
    fn invalid_email_and_short_name_rejected() {
        assert!(request("Ada", "not-an-email", "longenough").validate().is_err());
        assert!(request("A", "ada@vault.gg", "longenough").validate().is_err());
    }

    #[test]
    fn validation_errors_become_readable_message() {
        let err: AppError = request("A", "ada@vault.gg", "short")
            .validate()
            .unwrap_err()
            .into();
        let msg = err.to_string();
        assert!(msg.contains("Name must be between 2 and 50 characters"));
        assert!(msg.contains("Password must be at least 8 characters long"));
    }

    #[test]
    fn blank_name_is_rejected_after_trimming() {
        let err: AppError = request("     ", "ada@vault.gg", "longenough")
            .validate()
            .unwrap_err()
            .into();
        assert_matches!(err, AppError::Core(CoreError::Validation(msg)) if msg.contains("Name must be"));
        assert!(request("  Ada  ", "ada@vault.gg", "longenough").validate().is_ok());
    }

    #[test]
    fn emails_are_normalized() {
        assert_eq!(normalize_email("  Player@Vault.GG "), "player@vault.gg");
    }
}
