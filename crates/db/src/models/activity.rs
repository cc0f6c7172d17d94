//! Activity log model. Activities are append-only.

use gamervault_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: DbId,
    pub user_id: DbId,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub title: String,
    pub description: Option<String>,
    pub metadata: serde_json::Value,
    pub created_at: Timestamp,
}

/// DTO for appending an activity entry.
#[derive(Debug)]
pub struct CreateActivity {
    pub user_id: DbId,
    pub activity_type: &'static str,
    pub title: String,
    pub description: Option<String>,
    pub metadata: serde_json::Value,
}
