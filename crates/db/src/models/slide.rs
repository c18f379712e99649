//! Homepage hero slide models and DTOs.

use parish_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `slides` table. Displayed ascending by `order_index`
/// (a flat ordered list, no partition).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Slide {
    pub id: DbId,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a slide. `order_index` is assigned by the repository
/// (appended to the end of the carousel).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSlide {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for partially updating a slide. `order_index` changes only through
/// the move endpoint, `is_active` through the toggle endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSlide {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
}
