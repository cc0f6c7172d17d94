//! Account field limits shared by registration and profile editing.

use crate::error::CoreError;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Display name bounds.
pub const MIN_DISPLAY_NAME_LENGTH: usize = 2;
pub const MAX_DISPLAY_NAME_LENGTH: usize = 50;

/// Maximum profile bio length.
pub const MAX_BIO_LENGTH: usize = 500;

/// Social link keys a profile may carry.
pub const VALID_SOCIAL_NETWORKS: &[&str] = &["steam", "xbox", "playstation", "twitch", "discord", "twitter"];

/// Trim a display name and check its length. Returns the trimmed name,
/// which is what gets stored.
pub fn validate_display_name(name: &str) -> Result<&str, CoreError> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if !(MIN_DISPLAY_NAME_LENGTH..=MAX_DISPLAY_NAME_LENGTH).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Name must be between {MIN_DISPLAY_NAME_LENGTH} and {MAX_DISPLAY_NAME_LENGTH} characters"
        )));
    }
    Ok(trimmed)
}

/// Validate a profile bio length.
pub fn validate_bio(bio: &str) -> Result<(), CoreError> {
    if bio.chars().count() > MAX_BIO_LENGTH {
        return Err(CoreError::Validation(format!(
            "bio must be at most {MAX_BIO_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate the social links object: a JSON object whose keys are known
/// networks and whose values are strings.
pub fn validate_social_links(links: &serde_json::Value) -> Result<(), CoreError> {
    let map = links.as_object().ok_or_else(|| {
        CoreError::Validation("socialLinks must be a JSON object".to_string())
    })?;

    for (key, value) in map {
        if !VALID_SOCIAL_NETWORKS.contains(&key.as_str()) {
            return Err(CoreError::Validation(format!(
                "Unknown social network '{key}'. Must be one of: {}",
                VALID_SOCIAL_NETWORKS.join(", ")
            )));
        }
        if !value.is_string() {
            return Err(CoreError::Validation(format!(
                "socialLinks.{key} must be a string"
            )));
        }
    }
    Ok(())
}
