//! Game catalog model and DTOs.

use gamervault_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: DbId,
    pub name: String,
    pub publisher: Option<String>,
    pub genres: Vec<String>,
    pub cover_image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a game to the catalog.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGame {
    pub name: String,
    pub publisher: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub cover_image: Option<String>,
}
