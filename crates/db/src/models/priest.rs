//! Priest models and DTOs.

use parish_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `priests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Priest {
    pub id: DbId,
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a priest.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePriest {
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for partially updating a priest.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePriest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
}
