//! Handlers for the donations screen: listing, recording, summary figures,
//! and CSV export.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use parish_core::donations::{summarize, validate_amount_cents, validate_status};
use parish_core::error::CoreError;
use parish_core::types::DbId;
use parish_db::models::donation::CreateDonation;
use parish_db::repositories::DonationRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/donations
///
/// List all donation records, newest first.
pub async fn list_donations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let donations = DonationRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: donations }))
}

/// POST /api/v1/donations
///
/// Record a donation (mirrored from the payment processor).
pub async fn create_donation(
    State(state): State<AppState>,
    Json(input): Json<CreateDonation>,
) -> AppResult<impl IntoResponse> {
    validate_amount_cents(input.amount_cents)?;
    if let Some(ref status) = input.status {
        validate_status(status)?;
    }

    let donation = DonationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        donation_id = donation.id,
        amount_cents = donation.amount_cents,
        status = %donation.status,
        "Donation recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: donation })))
}

/// Request body for a status update.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// PUT /api/v1/donations/{id}/status
///
/// Follow up on a processor webhook: pending -> completed/failed.
pub async fn update_donation_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<impl IntoResponse> {
    validate_status(&input.status)?;

    let donation = DonationRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Donation",
            id,
        }))?;

    tracing::info!(donation_id = id, status = %donation.status, "Donation status updated");

    Ok(Json(DataResponse { data: donation }))
}

/// DELETE /api/v1/donations/{id}
///
/// Remove a donation record (test entries, duplicates).
pub async fn delete_donation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DonationRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Donation",
            id,
        }));
    }

    tracing::info!(donation_id = id, "Donation deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/donations/summary
///
/// Aggregate figures for the donations screen. Only completed donations
/// count toward the raised total; every record counts as an attempt.
pub async fn donation_summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let donations = DonationRepo::list(&state.pool).await?;

    let summary = summarize(
        donations
            .iter()
            .map(|d| (d.amount_cents, d.status.as_str())),
    );

    Ok(Json(DataResponse { data: summary }))
}

/// GET /api/v1/donations/export
///
/// Export the full donation list as a CSV attachment, oldest first.
pub async fn export_donations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut donations = DonationRepo::list(&state.pool).await?;
    donations.reverse(); // list() is newest-first; exports read better oldest-first

    // Build CSV output.
    let mut csv_output =
        String::from("id,created_at,donor_name,donor_email,amount_cents,status,reference\n");
    for donation in &donations {
        csv_output.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            donation.id,
            donation.created_at.to_rfc3339(),
            csv_field(donation.donor_name.as_deref().unwrap_or("")),
            csv_field(donation.donor_email.as_deref().unwrap_or("")),
            donation.amount_cents,
            donation.status,
            csv_field(donation.reference.as_deref().unwrap_or("")),
        ));
    }

    Ok(axum::response::Response::builder()
        .status(200)
        .header("Content-Type", "text/csv")
        .header(
            "Content-Disposition",
            "attachment; filename=\"donations.csv\"",
        )
        .body(axum::body::Body::from(csv_output))
        .unwrap()
        .into_response())
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
