//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches where the entity is mutable

pub mod achievement;
pub mod activity;
pub mod game;
pub mod leaderboard;
pub mod listing;
pub mod nft;
pub mod social;
pub mod user;
pub mod user_profile;
