//! The http-only session cookie.
//!
//! The cookie is named [`SESSION_COOKIE`] and holds the raw JWT. It is
//! `HttpOnly` and `SameSite=Lax`; `Secure` is added when configured.

use axum::http::header::COOKIE;
use axum::http::{HeaderMap, HeaderValue};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// `Set-Cookie` value that expires the session cookie immediately.
pub const CLEAR_SESSION_COOKIE: &str = "token=; HttpOnly; Path=/; SameSite=Lax; Max-Age=0";

/// Build the `Set-Cookie` value carrying a freshly issued token.
pub fn session_cookie(
    token: &str,
    max_age_secs: i64,
    secure: bool,
) -> Result<HeaderValue, axum::http::header::InvalidHeaderValue> {
    let mut cookie =
        format!("{SESSION_COOKIE}={token}; HttpOnly; Path=/; SameSite=Lax; Max-Age={max_age_secs}");
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_static(CLEAR_SESSION_COOKIE)
}

/// Find the session token in the request's `Cookie` headers, if any.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}
