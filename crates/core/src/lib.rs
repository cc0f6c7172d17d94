//! Domain types and rules shared by the GamerVault database and API crates.
//!
//! Nothing in here performs I/O; repositories and handlers call into these
//! helpers to parse enumerations, clamp listing parameters, and validate input.

pub mod account;
pub mod activity;
pub mod error;
pub mod listing;
pub mod nft;
pub mod progression;
pub mod social;
pub mod types;
