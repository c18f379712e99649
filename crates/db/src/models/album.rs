//! Photo album models and DTOs.

use chrono::NaiveDate;
use parish_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `albums` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Album {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an album.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlbum {
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub event_date: Option<NaiveDate>,
}

/// DTO for partially updating an album.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAlbum {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub event_date: Option<NaiveDate>,
}
