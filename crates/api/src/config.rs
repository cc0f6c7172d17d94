//! Process configuration read from the environment (after `dotenvy` has
//! loaded any `.env` file).

use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Server settings.
///
/// | Env var                | Default                  |
/// |------------------------|--------------------------|
/// | `HOST`                 | `0.0.0.0`                |
/// | `PORT`                 | `3000`                   |
/// | `CORS_ORIGINS`         | `http://localhost:3000`  |
/// | `REQUEST_TIMEOUT_SECS` | `30`                     |
/// | `COOKIE_SECURE`        | `false`                  |
///
/// JWT settings are documented on [`JwtConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed to send credentialed requests.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// Add `Secure` to the session cookie. Enable behind HTTPS.
    pub cookie_secure: bool,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Read configuration, falling back to development defaults.
    ///
    /// # Panics
    ///
    /// Panics on values that fail to parse, or when `JWT_SECRET` is missing.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0".to_string()),
            port: env_or("PORT", 3000),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
            ),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            cookie_secure: env_or("COOKIE_SECURE", false),
            jwt: JwtConfig::from_env(),
        }
    }
}

/// Parse `key` from the environment, or return `default` when unset.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" http://a.test, ,http://b.test "),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn unset_variable_uses_default() {
        let port: u16 = env_or("GAMERVAULT_TEST_SURELY_UNSET_PORT", 4321);
        assert_eq!(port, 4321);
    }
}
