//! Donation status constants, validation, and aggregation.
//!
//! Payment processing itself happens at the payment processor; this system
//! only mirrors donation records, so the domain logic reduces to a closed
//! status set and the totals shown on the donations screen.

use serde::Serialize;

use crate::error::CoreError;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_FAILED: &str = "failed";

/// All valid donation statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_COMPLETED, STATUS_FAILED];

/// Validate a donation status string.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid donation status '{status}'. Must be one of: {VALID_STATUSES:?}"
        )))
    }
}

/// Validate a donation amount: must be strictly positive.
pub fn validate_amount_cents(amount_cents: i64) -> Result<(), CoreError> {
    if amount_cents > 0 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Donation amount must be positive, got {amount_cents}"
        )))
    }
}

/// Aggregate figures for a donation list.
///
/// Only `completed` donations count toward the raised total; pending and
/// failed attempts appear in `attempt_count` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DonationSummary {
    pub total_raised_cents: i64,
    pub completed_count: i64,
    pub attempt_count: i64,
}

/// Compute the summary over `(amount_cents, status)` pairs.
pub fn summarize<'a, I>(donations: I) -> DonationSummary
where
    I: IntoIterator<Item = (i64, &'a str)>,
{
    let mut summary = DonationSummary {
        total_raised_cents: 0,
        completed_count: 0,
        attempt_count: 0,
    };

    for (amount_cents, status) in donations {
        summary.attempt_count += 1;
        if status == STATUS_COMPLETED {
            summary.total_raised_cents += amount_cents;
            summary.completed_count += 1;
        }
    }

    summary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
