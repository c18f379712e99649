//! Pastoral group models and DTOs.

use parish_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pastorals` table. Displayed ascending by `order_index`
/// (a flat ordered list, no partition).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pastoral {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub coordinator: Option<String>,
    pub image_url: Option<String>,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a pastoral group. `order_index` is assigned by the
/// repository (appended to the end of the list).
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePastoral {
    pub name: String,
    pub description: Option<String>,
    pub coordinator: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for partially updating a pastoral group. `order_index` changes only
/// through the move endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePastoral {
    pub name: Option<String>,
    pub description: Option<String>,
    pub coordinator: Option<String>,
    pub image_url: Option<String>,
}
