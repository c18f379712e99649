//! Handlers for photo albums and their photos.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use parish_core::error::CoreError;
use parish_core::types::DbId;
use parish_db::models::album::{CreateAlbum, UpdateAlbum};
use parish_db::models::photo::{CreatePhoto, UpdatePhoto};
use parish_db::repositories::{AlbumRepo, PhotoRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Verify that an album exists, returning NotFound if it does not.
async fn ensure_album_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    if AlbumRepo::find_by_id(pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Album",
            id,
        }));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Albums
// ---------------------------------------------------------------------------

/// GET /api/v1/albums
pub async fn list_albums(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let albums = AlbumRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: albums }))
}

/// POST /api/v1/albums
pub async fn create_album(
    State(state): State<AppState>,
    Json(input): Json<CreateAlbum>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("title", &input.title)?;

    let album = AlbumRepo::create(&state.pool, &input).await?;

    tracing::info!(album_id = album.id, title = %album.title, "Album created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: album })))
}

/// GET /api/v1/albums/{id}
///
/// Album detail including its photos.
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let album = AlbumRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Album",
            id,
        }))?;

    let photos = PhotoRepo::list_for_album(&state.pool, id).await?;

    let detail = serde_json::json!({
        "album": album,
        "photos": photos,
    });

    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/albums/{id}
pub async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAlbum>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        require_non_empty("title", title)?;
    }

    let album = AlbumRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Album",
            id,
        }))?;

    tracing::info!(album_id = id, "Album updated");

    Ok(Json(DataResponse { data: album }))
}

/// DELETE /api/v1/albums/{id}
///
/// Delete an album; its photos cascade with it.
pub async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = AlbumRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Album",
            id,
        }));
    }

    tracing::info!(album_id = id, "Album deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Photos
// ---------------------------------------------------------------------------

/// GET /api/v1/albums/{id}/photos
pub async fn list_photos(
    State(state): State<AppState>,
    Path(album_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_album_exists(&state.pool, album_id).await?;

    let photos = PhotoRepo::list_for_album(&state.pool, album_id).await?;

    Ok(Json(DataResponse { data: photos }))
}

/// POST /api/v1/albums/{id}/photos
///
/// Attach a photo to the album. The URL comes from a prior media upload.
pub async fn create_photo(
    State(state): State<AppState>,
    Path(album_id): Path<DbId>,
    Json(input): Json<CreatePhoto>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("url", &input.url)?;
    ensure_album_exists(&state.pool, album_id).await?;

    let photo = PhotoRepo::create(&state.pool, album_id, &input).await?;

    tracing::info!(photo_id = photo.id, album_id, "Photo added to album");

    Ok((StatusCode::CREATED, Json(DataResponse { data: photo })))
}

/// PUT /api/v1/photos/{id}
pub async fn update_photo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePhoto>,
) -> AppResult<impl IntoResponse> {
    let photo = PhotoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id,
        }))?;

    tracing::info!(photo_id = id, "Photo updated");

    Ok(Json(DataResponse { data: photo }))
}

/// DELETE /api/v1/photos/{id}
pub async fn delete_photo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PhotoRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id,
        }));
    }

    tracing::info!(photo_id = id, "Photo deleted");

    Ok(StatusCode::NO_CONTENT)
}
