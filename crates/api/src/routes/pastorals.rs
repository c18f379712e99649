//! Route definitions for pastoral groups, mounted at `/pastorals`.
//!
//! ```text
//! GET    /               -> list_pastorals
//! POST   /               -> create_pastoral
//! GET    /{id}           -> get_pastoral
//! PUT    /{id}           -> update_pastoral
//! DELETE /{id}           -> delete_pastoral
//! POST   /{id}/move      -> move_pastoral
//! POST   /{id}/toggle    -> toggle_pastoral
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pastorals;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(pastorals::list_pastorals).post(pastorals::create_pastoral),
        )
        .route(
            "/{id}",
            get(pastorals::get_pastoral)
                .put(pastorals::update_pastoral)
                .delete(pastorals::delete_pastoral),
        )
        .route("/{id}/move", post(pastorals::move_pastoral))
        .route("/{id}/toggle", post(pastorals::toggle_pastoral))
}
