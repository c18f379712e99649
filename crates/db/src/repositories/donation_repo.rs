//! Repository for the `donations` table.

use sqlx::PgPool;

use parish_core::types::DbId;

use crate::models::donation::{CreateDonation, Donation};

/// Column list for `donations` queries.
const COLUMNS: &str = "\
    id, donor_name, donor_email, amount_cents, status, reference, \
    created_at, updated_at";

/// Provides data access for donation records.
pub struct DonationRepo;

impl DonationRepo {
    /// List all donations, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Donation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM donations ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Donation>(&query).fetch_all(pool).await
    }

    /// Find a donation by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Donation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM donations WHERE id = $1");
        sqlx::query_as::<_, Donation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Record a donation. `status` must already be validated by the caller.
    pub async fn create(pool: &PgPool, input: &CreateDonation) -> Result<Donation, sqlx::Error> {
        let query = format!(
            "INSERT INTO donations \
                 (donor_name, donor_email, amount_cents, status, reference) \
             VALUES ($1, $2, $3, COALESCE($4, 'pending'), $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(&input.donor_name)
            .bind(&input.donor_email)
            .bind(input.amount_cents)
            .bind(&input.status)
            .bind(&input.reference)
            .fetch_one(pool)
            .await
    }

    /// Update a donation's status (processor webhook follow-up).
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Donation>, sqlx::Error> {
        let query = format!(
            "UPDATE donations SET status = $2 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a donation record. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM donations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
