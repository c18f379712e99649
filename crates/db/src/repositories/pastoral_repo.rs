//! Repository for the `pastorals` table (flat ordered list).

use sqlx::PgPool;

use parish_core::ordering::{MoveDirection, MoveOutcome};
use parish_core::types::DbId;

use crate::models::pastoral::{CreatePastoral, Pastoral, UpdatePastoral};
use crate::repositories::ordering;

/// Column list for `pastorals` queries.
const COLUMNS: &str = "\
    id, name, description, coordinator, image_url, \
    order_index, is_active, created_at, updated_at";

/// Provides CRUD and reorder operations for pastoral groups.
pub struct PastoralRepo;

impl PastoralRepo {
    /// List pastoral groups in display order, optionally including inactive
    /// ones.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Pastoral>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM pastorals ORDER BY order_index, id")
        } else {
            format!(
                "SELECT {COLUMNS} FROM pastorals \
                 WHERE is_active = true \
                 ORDER BY order_index, id"
            )
        };
        sqlx::query_as::<_, Pastoral>(&query).fetch_all(pool).await
    }

    /// Find a pastoral group by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pastoral>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pastorals WHERE id = $1");
        sqlx::query_as::<_, Pastoral>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new pastoral group at the end of the list.
    ///
    /// The appended `order_index` is computed inside the INSERT from current
    /// table state, so deletions (which leave gaps) can never cause a
    /// collision with a stale cached count.
    pub async fn create(pool: &PgPool, input: &CreatePastoral) -> Result<Pastoral, sqlx::Error> {
        let query = format!(
            "INSERT INTO pastorals \
                 (name, description, coordinator, image_url, order_index, is_active) \
             VALUES ($1, $2, $3, $4, \
                 (SELECT COALESCE(MAX(order_index), -1) + 1 FROM pastorals), \
                 COALESCE($5, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pastoral>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.coordinator)
            .bind(&input.image_url)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Partially update a pastoral group's content fields.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePastoral,
    ) -> Result<Option<Pastoral>, sqlx::Error> {
        let query = format!(
            "UPDATE pastorals SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 coordinator = COALESCE($4, coordinator), \
                 image_url = COALESCE($5, image_url) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pastoral>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.coordinator)
            .bind(&input.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Swap a pastoral group with its neighbor in the given direction.
    pub async fn move_entry(
        pool: &PgPool,
        id: DbId,
        direction: MoveDirection,
    ) -> Result<MoveOutcome, sqlx::Error> {
        ordering::move_within_partition(pool, "pastorals", None, id, direction).await
    }

    /// Flip `is_active` and nothing else. Returns the updated row.
    pub async fn toggle_active(pool: &PgPool, id: DbId) -> Result<Option<Pastoral>, sqlx::Error> {
        let query = format!(
            "UPDATE pastorals SET is_active = NOT is_active \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pastoral>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pastoral group by ID. Survivors keep their `order_index`
    /// (gaps are expected). Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pastorals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
