//! Celebration schedule models and DTOs.

use chrono::NaiveTime;
use parish_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `celebrations` table. Ordered ascending by `order_index`
/// within its `day_of_week` partition (0 = Sunday .. 6 = Saturday).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Celebration {
    pub id: DbId,
    pub day_of_week: i16,
    pub title: String,
    pub starts_at: NaiveTime,
    pub location: Option<String>,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a celebration. `order_index` is assigned by the
/// repository (appended to the end of its day).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCelebration {
    pub day_of_week: i16,
    pub title: String,
    pub starts_at: NaiveTime,
    pub location: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for partially updating a celebration's content fields.
///
/// `day_of_week` is deliberately absent: moving a celebration to another day
/// is a delete + recreate, so an edit can never cross its ordering partition.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCelebration {
    pub title: Option<String>,
    pub starts_at: Option<NaiveTime>,
    pub location: Option<String>,
}
