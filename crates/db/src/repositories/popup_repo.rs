//! Repository for the `popups` table.

use sqlx::PgPool;

use parish_core::types::DbId;

use crate::models::popup::{CreatePopup, Popup, UpdatePopup};

/// Column list for `popups` queries.
const COLUMNS: &str = "\
    id, title, image_url, link_url, starts_on, ends_on, \
    is_active, created_at, updated_at";

/// Provides CRUD operations for announcement popups.
pub struct PopupRepo;

impl PopupRepo {
    /// List popups, newest first, optionally including inactive ones.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Popup>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM popups ORDER BY created_at DESC")
        } else {
            format!(
                "SELECT {COLUMNS} FROM popups \
                 WHERE is_active = true \
                 ORDER BY created_at DESC"
            )
        };
        sqlx::query_as::<_, Popup>(&query).fetch_all(pool).await
    }

    /// Find a popup by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Popup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM popups WHERE id = $1");
        sqlx::query_as::<_, Popup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new popup.
    pub async fn create(pool: &PgPool, input: &CreatePopup) -> Result<Popup, sqlx::Error> {
        let query = format!(
            "INSERT INTO popups \
                 (title, image_url, link_url, starts_on, ends_on, is_active) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Popup>(&query)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.link_url)
            .bind(input.starts_on)
            .bind(input.ends_on)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Partially update a popup. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePopup,
    ) -> Result<Option<Popup>, sqlx::Error> {
        let query = format!(
            "UPDATE popups SET \
                 title = COALESCE($2, title), \
                 image_url = COALESCE($3, image_url), \
                 link_url = COALESCE($4, link_url), \
                 starts_on = COALESCE($5, starts_on), \
                 ends_on = COALESCE($6, ends_on) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Popup>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.link_url)
            .bind(input.starts_on)
            .bind(input.ends_on)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_active` and nothing else. Returns the updated row.
    pub async fn toggle_active(pool: &PgPool, id: DbId) -> Result<Option<Popup>, sqlx::Error> {
        let query = format!(
            "UPDATE popups SET is_active = NOT is_active \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Popup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a popup by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM popups WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
