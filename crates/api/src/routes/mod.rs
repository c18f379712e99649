pub mod albums;
pub mod celebrations;
pub mod donations;
pub mod health;
pub mod media;
pub mod pastorals;
pub mod popups;
pub mod posts;
pub mod priests;
pub mod settings;
pub mod slides;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /posts                        list, create
/// /posts/{id}                   get, update, delete
/// /posts/{id}/toggle            flip visibility (POST)
///
/// /albums                       list, create
/// /albums/{id}                  get (with photos), update, delete
/// /albums/{id}/photos           list, add
/// /photos/{id}                  update caption, delete
///
/// /priests                      list, create
/// /priests/{id}                 get, update, delete
/// /priests/{id}/toggle          flip visibility (POST)
///
/// /pastorals                    list, create
/// /pastorals/{id}               get, update, delete
/// /pastorals/{id}/move          reorder (POST)
/// /pastorals/{id}/toggle        flip visibility (POST)
///
/// /celebrations                 list (?day=), create
/// /celebrations/{id}            get, update, delete
/// /celebrations/{id}/move       reorder within its day (POST)
/// /celebrations/{id}/toggle     flip visibility (POST)
///
/// /slides                       list, create
/// /slides/{id}                  get, update, delete
/// /slides/{id}/move             reorder (POST)
/// /slides/{id}/toggle           flip visibility (POST)
///
/// /popups                       list, create
/// /popups/{id}                  get, update, delete
/// /popups/{id}/toggle           flip visibility (POST)
///
/// /donations                    list, record
/// /donations/summary            aggregate figures (GET)
/// /donations/export             CSV export (GET)
/// /donations/{id}               delete
/// /donations/{id}/status        status follow-up (PUT)
///
/// /settings                     read all, bulk upsert
/// /settings/theme               computed CSS variables (GET)
///
/// /media?kind=...               multipart upload (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Blog posts.
        .nest("/posts", posts::router())
        // Photo albums (nests per-album photo routes).
        .nest("/albums", albums::router())
        // Photo-by-id operations.
        .nest("/photos", albums::photos_router())
        // Priests.
        .nest("/priests", priests::router())
        // Pastoral groups (ordered).
        .nest("/pastorals", pastorals::router())
        // Celebration schedule (ordered per day of week).
        .nest("/celebrations", celebrations::router())
        // Homepage slide carousel (ordered).
        .nest("/slides", slides::router())
        // Announcement popups.
        .nest("/popups", popups::router())
        // Donations list, summary, export.
        .nest("/donations", donations::router())
        // Site settings and theme.
        .nest("/settings", settings::router())
        // Media uploads.
        .nest("/media", media::router())
}
