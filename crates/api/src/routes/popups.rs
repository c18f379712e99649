//! Route definitions for announcement popups, mounted at `/popups`.
//!
//! ```text
//! GET    /               -> list_popups
//! POST   /               -> create_popup
//! GET    /{id}           -> get_popup
//! PUT    /{id}           -> update_popup
//! DELETE /{id}           -> delete_popup
//! POST   /{id}/toggle    -> toggle_popup
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::popups;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(popups::list_popups).post(popups::create_popup))
        .route(
            "/{id}",
            get(popups::get_popup)
                .put(popups::update_popup)
                .delete(popups::delete_popup),
        )
        .route("/{id}/toggle", post(popups::toggle_popup))
}
