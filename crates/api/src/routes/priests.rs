//! Route definitions for priests, mounted at `/priests`.
//!
//! ```text
//! GET    /               -> list_priests
//! POST   /               -> create_priest
//! GET    /{id}           -> get_priest
//! PUT    /{id}           -> update_priest
//! DELETE /{id}           -> delete_priest
//! POST   /{id}/toggle    -> toggle_priest
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::priests;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(priests::list_priests).post(priests::create_priest))
        .route(
            "/{id}",
            get(priests::get_priest)
                .put(priests::update_priest)
                .delete(priests::delete_priest),
        )
        .route("/{id}/toggle", post(priests::toggle_priest))
}
