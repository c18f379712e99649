//! Route definitions for photo albums.
//!
//! Two routers are provided:
//! - `router()` for album routes mounted at `/albums`
//! - `photos_router()` for photo-by-id routes mounted at `/photos`
//!
//! ```text
//! GET    /                    -> list_albums
//! POST   /                    -> create_album
//! GET    /{id}                -> get_album (with photos)
//! PUT    /{id}                -> update_album
//! DELETE /{id}                -> delete_album (cascades photos)
//! GET    /{id}/photos         -> list_photos
//! POST   /{id}/photos         -> create_photo
//!
//! PUT    /{id}                -> update_photo      (photos_router)
//! DELETE /{id}                -> delete_photo      (photos_router)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::albums;
use crate::state::AppState;

/// Album routes mounted at `/albums`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(albums::list_albums).post(albums::create_album))
        .route(
            "/{id}",
            get(albums::get_album)
                .put(albums::update_album)
                .delete(albums::delete_album),
        )
        .route(
            "/{id}/photos",
            get(albums::list_photos).post(albums::create_photo),
        )
}

/// Photo-by-id routes mounted at `/photos`.
pub fn photos_router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        axum::routing::put(albums::update_photo).delete(albums::delete_photo),
    )
}
