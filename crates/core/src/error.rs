use crate::types::DbId;

/// Domain-level error type shared by all crates.
///
/// The API layer wraps this in its own `AppError` and maps each variant to
/// an HTTP status code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id came back empty.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed validation before any persistence call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with existing state (e.g. duplicate slug).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
