//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` (or any `PgExecutor` when the call may run inside a transaction)
//! as the first argument.

pub mod achievement_repo;
pub mod activity_repo;
pub mod friend_request_repo;
pub mod game_repo;
pub mod leaderboard_repo;
pub mod marketplace_repo;
pub mod nft_repo;
pub mod post_repo;
pub mod user_profile_repo;
pub mod user_repo;

pub use achievement_repo::AchievementRepo;
pub use activity_repo::ActivityRepo;
pub use friend_request_repo::FriendRequestRepo;
pub use game_repo::GameRepo;
pub use leaderboard_repo::LeaderboardRepo;
pub use marketplace_repo::MarketplaceRepo;
pub use nft_repo::NftRepo;
pub use post_repo::PostRepo;
pub use user_profile_repo::UserProfileRepo;
pub use user_repo::UserRepo;

/// SQL expression ranking a `rarity` column by tier (Common = 1 .. Mythic = 6).
pub(crate) const RARITY_RANK_SQL: &str =
    "array_position(ARRAY['Common', 'Uncommon', 'Rare', 'Epic', 'Legendary', 'Mythic']::TEXT[], rarity)";
