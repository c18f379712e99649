//! Repository for the `albums` table.

use sqlx::PgPool;

use parish_core::types::DbId;

use crate::models::album::{Album, CreateAlbum, UpdateAlbum};

/// Column list for `albums` queries.
const COLUMNS: &str = "id, title, description, cover_image_url, event_date, created_at, updated_at";

/// Provides CRUD operations for photo albums.
pub struct AlbumRepo;

impl AlbumRepo {
    /// List albums, most recent event first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Album>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM albums \
             ORDER BY event_date DESC NULLS LAST, created_at DESC"
        );
        sqlx::query_as::<_, Album>(&query).fetch_all(pool).await
    }

    /// Find an album by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE id = $1");
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new album.
    pub async fn create(pool: &PgPool, input: &CreateAlbum) -> Result<Album, sqlx::Error> {
        let query = format!(
            "INSERT INTO albums (title, description, cover_image_url, event_date) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.cover_image_url)
            .bind(input.event_date)
            .fetch_one(pool)
            .await
    }

    /// Partially update an album. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAlbum,
    ) -> Result<Option<Album>, sqlx::Error> {
        let query = format!(
            "UPDATE albums SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 cover_image_url = COALESCE($4, cover_image_url), \
                 event_date = COALESCE($5, event_date) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.cover_image_url)
            .bind(input.event_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an album by ID. Its photos go with it (FK cascade).
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
