//! Request extractors enforcing authentication.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from the session
//!   cookie (or a Bearer token).

pub mod auth;
