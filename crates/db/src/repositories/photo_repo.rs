//! Repository for the `photos` table.

use sqlx::PgPool;

use parish_core::types::DbId;

use crate::models::photo::{CreatePhoto, Photo, UpdatePhoto};

/// Column list for `photos` queries.
const COLUMNS: &str = "id, album_id, url, caption, created_at, updated_at";

/// Provides CRUD operations for album photos.
pub struct PhotoRepo;

impl PhotoRepo {
    /// List all photos of an album, oldest first.
    pub async fn list_for_album(pool: &PgPool, album_id: DbId) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photos \
             WHERE album_id = $1 \
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(album_id)
            .fetch_all(pool)
            .await
    }

    /// Find a photo by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photos WHERE id = $1");
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Add a photo to an album.
    pub async fn create(
        pool: &PgPool,
        album_id: DbId,
        input: &CreatePhoto,
    ) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO photos (album_id, url, caption) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(album_id)
            .bind(&input.url)
            .bind(&input.caption)
            .fetch_one(pool)
            .await
    }

    /// Update a photo's caption.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePhoto,
    ) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!(
            "UPDATE photos SET caption = COALESCE($2, caption) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .bind(&input.caption)
            .fetch_optional(pool)
            .await
    }

    /// Delete a photo by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
