//! Route definition for media uploads, mounted at `/media`.
//!
//! ```text
//! POST   /?kind=slide|photo|post_cover|priest|popup   -> upload_media
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(media::upload_media))
}
