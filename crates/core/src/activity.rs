//! Activity log kinds and the titles written for them.
//!
//! Activities are append-only: once recorded they are never updated or
//! deleted, so the strings produced here end up verbatim in user history.

use serde::Serialize;

use crate::error::CoreError;

/// The kind of event an activity entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Purchase,
    Sale,
    AchievementUnlocked,
    NftMinted,
    NftListed,
    NftDelisted,
    FriendAdded,
    PostCreated,
}

const VALID_KIND_STRINGS: &[&str] = &[
    "purchase",
    "sale",
    "achievement_unlocked",
    "nft_minted",
    "nft_listed",
    "nft_delisted",
    "friend_added",
    "post_created",
];

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Sale => "sale",
            Self::AchievementUnlocked => "achievement_unlocked",
            Self::NftMinted => "nft_minted",
            Self::NftListed => "nft_listed",
            Self::NftDelisted => "nft_delisted",
            Self::FriendAdded => "friend_added",
            Self::PostCreated => "post_created",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "purchase" => Ok(Self::Purchase),
            "sale" => Ok(Self::Sale),
            "achievement_unlocked" => Ok(Self::AchievementUnlocked),
            "nft_minted" => Ok(Self::NftMinted),
            "nft_listed" => Ok(Self::NftListed),
            "nft_delisted" => Ok(Self::NftDelisted),
            "friend_added" => Ok(Self::FriendAdded),
            "post_created" => Ok(Self::PostCreated),
            _ => Err(CoreError::Validation(format!(
                "Invalid activity type '{s}'. Must be one of: {}",
                VALID_KIND_STRINGS.join(", ")
            ))),
        }
    }

    /// Human-readable title for an activity about `subject` (an NFT name,
    /// achievement name, or friend's display name).
    pub fn title(&self, subject: &str) -> String {
        match self {
            Self::Purchase => format!("Purchased {subject}"),
            Self::Sale => format!("Sold {subject}"),
            Self::AchievementUnlocked => format!("Unlocked {subject}"),
            Self::NftMinted => format!("Added {subject} to collection"),
            Self::NftListed => format!("Listed {subject} for sale"),
            Self::NftDelisted => format!("Removed {subject} from sale"),
            Self::FriendAdded => format!("Became friends with {subject}"),
            Self::PostCreated => "Shared a new post".to_string(),
        }
    }
}
