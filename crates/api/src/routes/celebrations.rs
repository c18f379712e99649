//! Route definitions for the celebration schedule, mounted at
//! `/celebrations`.
//!
//! ```text
//! GET    /               -> list_celebrations (?day=0..6)
//! POST   /               -> create_celebration
//! GET    /{id}           -> get_celebration
//! PUT    /{id}           -> update_celebration
//! DELETE /{id}           -> delete_celebration
//! POST   /{id}/move      -> move_celebration (within its day)
//! POST   /{id}/toggle    -> toggle_celebration
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::celebrations;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(celebrations::list_celebrations).post(celebrations::create_celebration),
        )
        .route(
            "/{id}",
            get(celebrations::get_celebration)
                .put(celebrations::update_celebration)
                .delete(celebrations::delete_celebration),
        )
        .route("/{id}/move", post(celebrations::move_celebration))
        .route("/{id}/toggle", post(celebrations::toggle_celebration))
}
