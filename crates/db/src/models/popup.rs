//! Announcement popup models and DTOs.

use chrono::NaiveDate;
use parish_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `popups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Popup {
    pub id: DbId,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a popup.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePopup {
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

/// DTO for partially updating a popup. `is_active` changes only through the
/// toggle endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePopup {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
}
