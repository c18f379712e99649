use std::sync::Arc;

use crate::config::ServerConfig;
use crate::media::MediaStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: parish_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Media storage backend uploads are handed to after validation.
    pub media_store: Arc<dyn MediaStore>,
}
