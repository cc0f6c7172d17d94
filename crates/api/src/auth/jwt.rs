//! Signed session tokens.
//!
//! A token is an HS256 JWT carrying [`Claims`]. It is issued on register and
//! login, stored in the `token` cookie, and checked by
//! [`AuthUser`](crate::middleware::auth::AuthUser).

use chrono::Utc;
use gamervault_core::types::DbId;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_EXPIRY_HOURS: i64 = 168;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: DbId,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    /// Random per-token id.
    pub jti: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

impl JwtConfig {
    /// `JWT_SECRET` is required and must be non-empty. `JWT_EXPIRY_HOURS`
    /// defaults to one week.
    ///
    /// # Panics
    ///
    /// Panics when the secret is missing or the expiry is not an integer.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .expect("JWT_SECRET must be set to a non-empty value");

        let expiry_hours = match std::env::var("JWT_EXPIRY_HOURS") {
            Ok(raw) => raw
                .parse()
                .unwrap_or_else(|e| panic!("JWT_EXPIRY_HOURS '{raw}' is not an integer: {e}")),
            Err(_) => DEFAULT_EXPIRY_HOURS,
        };

        Self {
            secret,
            expiry_hours,
        }
    }

    /// Session lifetime in seconds. The cookie `Max-Age` uses the same value.
    pub fn expiry_secs(&self) -> i64 {
        self.expiry_hours * 3600
    }

    fn validation() -> Validation {
        Validation::new(Algorithm::HS256)
    }
}

/// Issue a session token for `user_id`.
pub fn generate_token(
    user_id: DbId,
    email: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        email: email.to_owned(),
        iat,
        exp: iat + config.expiry_secs(),
        jti: Uuid::new_v4().to_string(),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check signature and expiry, then return the claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &JwtConfig::validation(),
    )
    .map(|data| data.claims)
}
