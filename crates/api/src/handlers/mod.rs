pub mod achievement;
pub mod activity;
pub mod auth;
pub mod game;
pub mod inventory;
pub mod leaderboard;
pub mod marketplace;
pub mod nft;
pub mod profile;
pub mod social;
