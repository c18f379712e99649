//! Handlers for the homepage slide carousel.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use parish_core::error::CoreError;
use parish_core::ordering::MoveOutcome;
use parish_core::types::DbId;
use parish_db::models::slide::{CreateSlide, UpdateSlide};
use parish_db::repositories::SlideRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{require_non_empty, MoveRequest};
use crate::query::IncludeInactiveParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/slides
///
/// List slides in carousel order.
pub async fn list_slides(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let slides = SlideRepo::list(&state.pool, params.include_inactive).await?;

    Ok(Json(DataResponse { data: slides }))
}

/// POST /api/v1/slides
///
/// Create a slide, appended to the end of the carousel.
pub async fn create_slide(
    State(state): State<AppState>,
    Json(input): Json<CreateSlide>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("title", &input.title)?;
    require_non_empty("image_url", &input.image_url)?;

    let slide = SlideRepo::create(&state.pool, &input).await?;

    tracing::info!(slide_id = slide.id, order_index = slide.order_index, "Slide created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: slide })))
}

/// GET /api/v1/slides/{id}
pub async fn get_slide(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let slide = SlideRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Slide", id }))?;

    Ok(Json(DataResponse { data: slide }))
}

/// PUT /api/v1/slides/{id}
pub async fn update_slide(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSlide>,
) -> AppResult<impl IntoResponse> {
    let slide = SlideRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Slide", id }))?;

    tracing::info!(slide_id = id, "Slide updated");

    Ok(Json(DataResponse { data: slide }))
}

/// POST /api/v1/slides/{id}/move
///
/// Swap the slide with its neighbor in the requested direction. A move at
/// the edge of the carousel is a silent no-op. The full, freshly re-read
/// carousel is returned so clients render persisted order.
pub async fn move_slide(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = SlideRepo::move_entry(&state.pool, id, input.direction).await?;

    if outcome == MoveOutcome::NotFound {
        return Err(AppError::Core(CoreError::NotFound { entity: "Slide", id }));
    }

    if outcome == MoveOutcome::Moved {
        tracing::info!(slide_id = id, direction = ?input.direction, "Slide moved");
    }

    let slides = SlideRepo::list(&state.pool, true).await?;

    Ok(Json(DataResponse { data: slides }))
}

/// POST /api/v1/slides/{id}/toggle
///
/// Flip `is_active`; ordering is untouched.
pub async fn toggle_slide(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let slide = SlideRepo::toggle_active(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Slide", id }))?;

    tracing::info!(slide_id = id, is_active = slide.is_active, "Slide visibility toggled");

    Ok(Json(DataResponse { data: slide }))
}

/// DELETE /api/v1/slides/{id}
///
/// Remove a slide. Remaining slides keep their indices (gaps are fine).
pub async fn delete_slide(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SlideRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Slide", id }));
    }

    tracing::info!(slide_id = id, "Slide deleted");

    Ok(StatusCode::NO_CONTENT)
}
