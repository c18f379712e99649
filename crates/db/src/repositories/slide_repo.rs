//! Repository for the `slides` table (flat ordered list).

use sqlx::PgPool;

use parish_core::ordering::{MoveDirection, MoveOutcome};
use parish_core::types::DbId;

use crate::models::slide::{CreateSlide, Slide, UpdateSlide};
use crate::repositories::ordering;

/// Column list for `slides` queries.
const COLUMNS: &str = "\
    id, title, subtitle, image_url, link_url, \
    order_index, is_active, created_at, updated_at";

/// Provides CRUD and reorder operations for homepage slides.
pub struct SlideRepo;

impl SlideRepo {
    /// List slides in carousel order, optionally including inactive ones.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Slide>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM slides ORDER BY order_index, id")
        } else {
            format!(
                "SELECT {COLUMNS} FROM slides \
                 WHERE is_active = true \
                 ORDER BY order_index, id"
            )
        };
        sqlx::query_as::<_, Slide>(&query).fetch_all(pool).await
    }

    /// Find a slide by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Slide>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM slides WHERE id = $1");
        sqlx::query_as::<_, Slide>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new slide at the end of the carousel (appended
    /// `order_index` computed inside the INSERT from current state).
    pub async fn create(pool: &PgPool, input: &CreateSlide) -> Result<Slide, sqlx::Error> {
        let query = format!(
            "INSERT INTO slides \
                 (title, subtitle, image_url, link_url, order_index, is_active) \
             VALUES ($1, $2, $3, $4, \
                 (SELECT COALESCE(MAX(order_index), -1) + 1 FROM slides), \
                 COALESCE($5, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_url)
            .bind(&input.link_url)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Partially update a slide's content fields.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSlide,
    ) -> Result<Option<Slide>, sqlx::Error> {
        let query = format!(
            "UPDATE slides SET \
                 title = COALESCE($2, title), \
                 subtitle = COALESCE($3, subtitle), \
                 image_url = COALESCE($4, image_url), \
                 link_url = COALESCE($5, link_url) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_url)
            .bind(&input.link_url)
            .fetch_optional(pool)
            .await
    }

    /// Swap a slide with its neighbor in the given direction.
    pub async fn move_entry(
        pool: &PgPool,
        id: DbId,
        direction: MoveDirection,
    ) -> Result<MoveOutcome, sqlx::Error> {
        ordering::move_within_partition(pool, "slides", None, id, direction).await
    }

    /// Flip `is_active` and nothing else. Returns the updated row.
    pub async fn toggle_active(pool: &PgPool, id: DbId) -> Result<Option<Slide>, sqlx::Error> {
        let query = format!(
            "UPDATE slides SET is_active = NOT is_active \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Slide>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slide by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM slides WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
