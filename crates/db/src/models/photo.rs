//! Album photo models and DTOs.

use parish_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `photos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    pub album_id: DbId,
    pub url: String,
    pub caption: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a photo to an album (the album id comes from the path).
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePhoto {
    pub url: String,
    pub caption: Option<String>,
}

/// DTO for updating a photo's caption.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePhoto {
    pub caption: Option<String>,
}
