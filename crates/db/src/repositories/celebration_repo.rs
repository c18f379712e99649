//! Repository for the `celebrations` table (ordered within each day of
//! week).

use sqlx::PgPool;

use parish_core::ordering::{MoveDirection, MoveOutcome};
use parish_core::types::DbId;

use crate::models::celebration::{Celebration, CreateCelebration, UpdateCelebration};
use crate::repositories::ordering;

/// Column list for `celebrations` queries.
const COLUMNS: &str = "\
    id, day_of_week, title, starts_at, location, \
    order_index, is_active, created_at, updated_at";

/// Provides CRUD and reorder operations for the celebration schedule.
pub struct CelebrationRepo;

impl CelebrationRepo {
    /// List the full week's schedule: by day, then display order.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<Celebration>, sqlx::Error> {
        let query = if include_inactive {
            format!(
                "SELECT {COLUMNS} FROM celebrations \
                 ORDER BY day_of_week, order_index, id"
            )
        } else {
            format!(
                "SELECT {COLUMNS} FROM celebrations \
                 WHERE is_active = true \
                 ORDER BY day_of_week, order_index, id"
            )
        };
        sqlx::query_as::<_, Celebration>(&query).fetch_all(pool).await
    }

    /// List one day's celebrations in display order.
    pub async fn list_for_day(
        pool: &PgPool,
        day_of_week: i16,
    ) -> Result<Vec<Celebration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM celebrations \
             WHERE day_of_week = $1 \
             ORDER BY order_index, id"
        );
        sqlx::query_as::<_, Celebration>(&query)
            .bind(day_of_week)
            .fetch_all(pool)
            .await
    }

    /// Find a celebration by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Celebration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM celebrations WHERE id = $1");
        sqlx::query_as::<_, Celebration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new celebration at the end of its day.
    ///
    /// The appended `order_index` is computed inside the INSERT from the
    /// day's current rows, so gaps left by deletions never cause collisions.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCelebration,
    ) -> Result<Celebration, sqlx::Error> {
        let query = format!(
            "INSERT INTO celebrations \
                 (day_of_week, title, starts_at, location, order_index, is_active) \
             VALUES ($1, $2, $3, $4, \
                 (SELECT COALESCE(MAX(order_index), -1) + 1 FROM celebrations \
                  WHERE day_of_week = $1), \
                 COALESCE($5, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Celebration>(&query)
            .bind(input.day_of_week)
            .bind(&input.title)
            .bind(input.starts_at)
            .bind(&input.location)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Partially update a celebration's content fields (never its day or
    /// order).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCelebration,
    ) -> Result<Option<Celebration>, sqlx::Error> {
        let query = format!(
            "UPDATE celebrations SET \
                 title = COALESCE($2, title), \
                 starts_at = COALESCE($3, starts_at), \
                 location = COALESCE($4, location) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Celebration>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.starts_at)
            .bind(&input.location)
            .fetch_optional(pool)
            .await
    }

    /// Swap a celebration with its neighbor within the same day. The day
    /// partition is derived from the row itself; other days are untouched.
    pub async fn move_entry(
        pool: &PgPool,
        id: DbId,
        direction: MoveDirection,
    ) -> Result<MoveOutcome, sqlx::Error> {
        ordering::move_within_partition(pool, "celebrations", Some("day_of_week"), id, direction)
            .await
    }

    /// Flip `is_active` and nothing else. Returns the updated row.
    pub async fn toggle_active(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Celebration>, sqlx::Error> {
        let query = format!(
            "UPDATE celebrations SET is_active = NOT is_active \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Celebration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a celebration by ID. The rest of its day keeps its indices
    /// (gaps are expected). Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM celebrations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
