//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT session-token generation and validation.
//! - [`cookie`] -- The http-only session cookie carrying the token.

pub mod cookie;
pub mod jwt;
pub mod password;
