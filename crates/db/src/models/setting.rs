//! Site settings model.
//!
//! A flat key/value table; typing lives in `parish_core::settings`.

use parish_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
