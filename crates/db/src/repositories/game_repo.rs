//! Repository for the `games` catalog.

use gamervault_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::{CreateGame, Game};

const COLUMNS: &str = "id, name, publisher, genres, cover_image, created_at, updated_at";

pub struct GameRepo;

impl GameRepo {
    pub async fn create(pool: &PgPool, input: &CreateGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (name, publisher, genres, cover_image)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.name)
            .bind(&input.publisher)
            .bind(&input.genres)
            .bind(&input.cover_image)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List games alphabetically, optionally restricted to one genre.
    pub async fn list(pool: &PgPool, genre: Option<&str>) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM games
             WHERE ($1::TEXT IS NULL OR $1 = ANY(genres))
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(genre)
            .fetch_all(pool)
            .await
    }
}
