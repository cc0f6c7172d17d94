//! HTTP error mapping.
//!
//! Every failing handler returns [`AppError`]; the response body is always
//! `{"error": <message>, "code": <CODE>}`. Internal details are logged and
//! replaced with a generic message before they reach the client.

use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gamervault_core::error::CoreError;
use serde_json::json;

use crate::auth::cookie::clear_session_cookie;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Postgres SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("bad request: {0}")]
    BadRequest(String),

    /// Missing, invalid or expired session. The response clears the cookie.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("internal: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(format_validation_errors(&errors)))
    }
}

/// Status, machine-readable code and client message for one error.
struct ErrorParts {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ErrorParts {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", INTERNAL_MESSAGE)
    }
}

impl From<&CoreError> for ErrorParts {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::NotFound { entity, id } => Self::new(
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            CoreError::Validation(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.as_str())
            }
            CoreError::InvalidOperation(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "INVALID_OPERATION", msg.as_str())
            }
            CoreError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "CONFLICT", msg.as_str()),
            CoreError::Unauthorized(msg) => {
                Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.as_str())
            }
            CoreError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, "FORBIDDEN", msg.as_str()),
            CoreError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal core error");
                Self::internal()
            }
        }
    }
}

impl From<&sqlx::Error> for ErrorParts {
    /// `RowNotFound` is a 404 and named `uq_*` unique violations are a 409.
    /// Anything else is logged and hidden behind a 500.
    fn from(err: &sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = err {
            return Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found");
        }

        let unique_constraint = match err {
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                db_err.constraint().filter(|c| c.starts_with("uq_"))
            }
            _ => None,
        };

        match unique_constraint {
            Some(constraint) => {
                Self::new(StatusCode::CONFLICT, "CONFLICT", conflict_message(constraint))
            }
            None => {
                tracing::error!(error = %err, "Database error");
                Self::internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let parts = match &self {
            AppError::Core(core) => ErrorParts::from(core),
            AppError::Database(err) => ErrorParts::from(err),
            AppError::BadRequest(msg) => {
                ErrorParts::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.as_str())
            }
            AppError::Unauthenticated(msg) => {
                let body = json!({ "error": msg, "code": "UNAUTHENTICATED" });
                return (
                    StatusCode::UNAUTHORIZED,
                    [(SET_COOKIE, clear_session_cookie())],
                    Json(body),
                )
                    .into_response();
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                ErrorParts::internal()
            }
        };

        let body = json!({ "error": parts.message, "code": parts.code });
        (parts.status, Json(body)).into_response()
    }
}

fn conflict_message(constraint: &str) -> String {
    let known = match constraint {
        "uq_users_email" => "An account with this email already exists",
        "uq_user_achievements_user_achievement" => "Achievement already unlocked",
        "uq_friend_requests_pair" => "A friend request between these users already exists",
        "uq_games_name" => "A game with this name already exists",
        other => return format!("Duplicate value violates unique constraint: {other}"),
    };
    known.to_string()
}

/// Join `validator` field messages into one sentence, sorted by field name.
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut messages = Vec::new();
    for (field, errs) in fields {
        for e in errs {
            messages.push(match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            });
        }
    }
    messages.join("; ")
}
