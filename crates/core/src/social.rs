//! Friend requests, posts, and leaderboard metrics.

use serde::Serialize;

use crate::error::CoreError;

/// Maximum length of a post body.
pub const MAX_POST_LENGTH: usize = 1000;

/// Default and maximum leaderboard sizes.
pub const DEFAULT_LEADERBOARD_SIZE: i64 = 10;
pub const MAX_LEADERBOARD_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// Friend request status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FriendRequestStatus {
    Pending,
    Accepted,
    Declined,
}

impl FriendRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            _ => Err(CoreError::Validation(format!(
                "Invalid friend request status '{s}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

/// What a leaderboard ranks users by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardMetric {
    Experience,
    Achievements,
    Nfts,
}

impl LeaderboardMetric {
    /// Parse the `by` query parameter; absent means experience.
    pub fn parse(s: Option<&str>) -> Result<Self, CoreError> {
        match s {
            None | Some("experience") => Ok(Self::Experience),
            Some("achievements") => Ok(Self::Achievements),
            Some("nfts") => Ok(Self::Nfts),
            Some(other) => Err(CoreError::Validation(format!(
                "Invalid leaderboard metric '{other}'. Must be one of: experience, achievements, nfts"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a post body: non-blank and at most [`MAX_POST_LENGTH`] characters.
pub fn validate_post_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "post content must not be empty".to_string(),
        ));
    }
    if content.chars().count() > MAX_POST_LENGTH {
        return Err(CoreError::Validation(format!(
            "post content must be at most {MAX_POST_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Reject friend requests a user sends to themselves.
pub fn validate_friend_request(sender_id: i64, receiver_id: i64) -> Result<(), CoreError> {
    if sender_id == receiver_id {
        return Err(CoreError::InvalidOperation(
            "You cannot send a friend request to yourself".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        for status in [
            FriendRequestStatus::Pending,
            FriendRequestStatus::Accepted,
            FriendRequestStatus::Declined,
        ] {
            assert_eq!(FriendRequestStatus::from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn leaderboard_metric_default() {
        assert_eq!(LeaderboardMetric::parse(None).unwrap(), LeaderboardMetric::Experience);
        assert_eq!(LeaderboardMetric::parse(Some("nfts")).unwrap(), LeaderboardMetric::Nfts);
        assert!(LeaderboardMetric::parse(Some("coins")).is_err());
    }

    #[test]
    fn post_content_rules() {
        assert!(validate_post_content("gg").is_ok());
        assert!(validate_post_content("  \n ").is_err());
        assert!(validate_post_content(&"a".repeat(MAX_POST_LENGTH + 1)).is_err());
    }

    #[test]
    fn self_friend_request_rejected() {
        assert!(validate_friend_request(4, 4).is_err());
        assert!(validate_friend_request(4, 5).is_ok());
    }
}
