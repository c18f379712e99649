//! Request handlers, one module per manager.

pub mod albums;
pub mod celebrations;
pub mod donations;
pub mod media;
pub mod pastorals;
pub mod popups;
pub mod posts;
pub mod priests;
pub mod settings;
pub mod slides;

use serde::Deserialize;

use parish_core::error::CoreError;
use parish_core::ordering::MoveDirection;

use crate::error::AppResult;

/// Request body for the move endpoints: `{"direction": "up" | "down"}`.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub direction: MoveDirection,
}

/// Reject an empty (or whitespace-only) required field before any
/// persistence call is made.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("Field '{field}' is required")).into());
    }
    Ok(())
}
