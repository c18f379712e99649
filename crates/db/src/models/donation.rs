//! Donation models and DTOs.
//!
//! Rows mirror the payment processor's records; `reference` carries the
//! processor's opaque transaction id when one exists.

use parish_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `donations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Donation {
    pub id: DbId,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub amount_cents: i64,
    pub status: String,
    pub reference: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a donation. `status` defaults to `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDonation {
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub amount_cents: i64,
    pub status: Option<String>,
    pub reference: Option<String>,
}
