//! Route definitions for donations, mounted at `/donations`.
//!
//! ```text
//! GET    /               -> list_donations
//! POST   /               -> create_donation
//! GET    /summary        -> donation_summary
//! GET    /export         -> export_donations (CSV)
//! DELETE /{id}           -> delete_donation
//! PUT    /{id}/status    -> update_donation_status
//! ```

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::donations;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(donations::list_donations).post(donations::create_donation),
        )
        .route("/summary", get(donations::donation_summary))
        .route("/export", get(donations::export_donations))
        .route("/{id}", delete(donations::delete_donation))
        .route("/{id}/status", put(donations::update_donation_status))
}
