//! Route definitions for the slide carousel, mounted at `/slides`.
//!
//! ```text
//! GET    /               -> list_slides
//! POST   /               -> create_slide
//! GET    /{id}           -> get_slide
//! PUT    /{id}           -> update_slide
//! DELETE /{id}           -> delete_slide
//! POST   /{id}/move      -> move_slide
//! POST   /{id}/toggle    -> toggle_slide
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::slides;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(slides::list_slides).post(slides::create_slide))
        .route(
            "/{id}",
            get(slides::get_slide)
                .put(slides::update_slide)
                .delete(slides::delete_slide),
        )
        .route("/{id}/move", post(slides::move_slide))
        .route("/{id}/toggle", post(slides::toggle_slide))
}
