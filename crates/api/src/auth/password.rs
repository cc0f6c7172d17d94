//! Password storage with Argon2id.
//!
//! Hashes are kept as PHC strings (`$argon2id$v=19$...`), which carry their
//! own salt and cost parameters.

use std::sync::LazyLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Stands in for the stored hash when a login names an unknown account, so
/// both failure paths pay for one argon2 verification.
static DUMMY_HASH: LazyLock<Result<String, HashError>> =
    LazyLock::new(|| hash_password("gamervault-no-such-account"));

/// Hash `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|phc| phc.to_string())
}

/// Check `password` against a stored PHC hash.
///
/// A mismatch is `Ok(false)`; only a malformed hash or an internal argon2
/// failure is an error.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, HashError> {
    let parsed = PasswordHash::new(stored)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(other) => Err(other),
    }
}

/// Verify a login attempt against the account's hash, or against a dummy
/// hash when no account matched. The result for a missing account is always
/// `Ok(false)`.
pub fn verify_credentials(password: &str, stored: Option<&str>) -> Result<bool, HashError> {
    match stored {
        Some(hash) => verify_password(password, hash),
        None => {
            let dummy = DUMMY_HASH.as_deref().map_err(Clone::clone)?;
            verify_password(password, dummy).map(|_| false)
        }
    }
}
