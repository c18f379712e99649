//! Route definitions for site settings, mounted at `/settings`.
//!
//! ```text
//! GET    /           -> get_settings
//! PUT    /           -> update_settings (bulk upsert)
//! GET    /theme      -> get_theme (computed CSS variables)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/theme", get(settings::get_theme))
}
