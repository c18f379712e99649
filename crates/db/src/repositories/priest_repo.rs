//! Repository for the `priests` table.

use sqlx::PgPool;

use parish_core::types::DbId;

use crate::models::priest::{CreatePriest, Priest, UpdatePriest};

/// Column list for `priests` queries.
const COLUMNS: &str = "id, name, title, bio, photo_url, is_active, created_at, updated_at";

/// Provides CRUD operations for priests.
pub struct PriestRepo;

impl PriestRepo {
    /// List priests by name, optionally including inactive ones.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Priest>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM priests ORDER BY name")
        } else {
            format!(
                "SELECT {COLUMNS} FROM priests \
                 WHERE is_active = true \
                 ORDER BY name"
            )
        };
        sqlx::query_as::<_, Priest>(&query).fetch_all(pool).await
    }

    /// Find a priest by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Priest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM priests WHERE id = $1");
        sqlx::query_as::<_, Priest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new priest.
    pub async fn create(pool: &PgPool, input: &CreatePriest) -> Result<Priest, sqlx::Error> {
        let query = format!(
            "INSERT INTO priests (name, title, bio, photo_url, is_active) \
             VALUES ($1, $2, $3, $4, COALESCE($5, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Priest>(&query)
            .bind(&input.name)
            .bind(&input.title)
            .bind(&input.bio)
            .bind(&input.photo_url)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Partially update a priest. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePriest,
    ) -> Result<Option<Priest>, sqlx::Error> {
        let query = format!(
            "UPDATE priests SET \
                 name = COALESCE($2, name), \
                 title = COALESCE($3, title), \
                 bio = COALESCE($4, bio), \
                 photo_url = COALESCE($5, photo_url) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Priest>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.title)
            .bind(&input.bio)
            .bind(&input.photo_url)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_active` and nothing else. Returns the updated row.
    pub async fn toggle_active(pool: &PgPool, id: DbId) -> Result<Option<Priest>, sqlx::Error> {
        let query = format!(
            "UPDATE priests SET is_active = NOT is_active \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Priest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a priest by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM priests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
