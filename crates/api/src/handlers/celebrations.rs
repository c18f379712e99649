//! Handlers for the celebration schedule (masses, confessions, adoration).
//!
//! Celebrations order within their day of week; a move can therefore only
//! ever swap two entries of the same day.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use parish_core::error::CoreError;
use parish_core::ordering::MoveOutcome;
use parish_core::schedule::{day_label, validate_day_of_week};
use parish_core::types::DbId;
use parish_db::models::celebration::{CreateCelebration, UpdateCelebration};
use parish_db::repositories::CelebrationRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{require_non_empty, MoveRequest};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the schedule listing.
#[derive(Debug, Deserialize)]
pub struct ScheduleParams {
    /// Restrict the listing to one day (0 = Sunday .. 6 = Saturday).
    pub day: Option<i16>,
    #[serde(default)]
    pub include_inactive: bool,
}

/// GET /api/v1/celebrations?day=0
///
/// List the schedule: the whole week ordered by day then position, or a
/// single day when `?day=` is given.
pub async fn list_celebrations(
    State(state): State<AppState>,
    Query(params): Query<ScheduleParams>,
) -> AppResult<impl IntoResponse> {
    let celebrations = match params.day {
        Some(day) => {
            validate_day_of_week(day)?;
            CelebrationRepo::list_for_day(&state.pool, day).await?
        }
        None => CelebrationRepo::list(&state.pool, params.include_inactive).await?,
    };

    Ok(Json(DataResponse { data: celebrations }))
}

/// POST /api/v1/celebrations
///
/// Create a celebration, appended to the end of its day.
pub async fn create_celebration(
    State(state): State<AppState>,
    Json(input): Json<CreateCelebration>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("title", &input.title)?;
    validate_day_of_week(input.day_of_week)?;

    let celebration = CelebrationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        celebration_id = celebration.id,
        day = day_label(celebration.day_of_week).unwrap_or("?"),
        order_index = celebration.order_index,
        "Celebration created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: celebration })))
}

/// GET /api/v1/celebrations/{id}
pub async fn get_celebration(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let celebration = CelebrationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Celebration",
            id,
        }))?;

    Ok(Json(DataResponse { data: celebration }))
}

/// PUT /api/v1/celebrations/{id}
///
/// Update content fields. The day of week is immutable here: moving a
/// celebration to another day is a delete + recreate, which keeps edits
/// from ever crossing an ordering partition.
pub async fn update_celebration(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCelebration>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        require_non_empty("title", title)?;
    }

    let celebration = CelebrationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Celebration",
            id,
        }))?;

    tracing::info!(celebration_id = id, "Celebration updated");

    Ok(Json(DataResponse { data: celebration }))
}

/// POST /api/v1/celebrations/{id}/move
///
/// Swap the celebration with its neighbor within the same day. Edge moves
/// are silent no-ops. Returns the re-read schedule for the affected day.
pub async fn move_celebration(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    let target = CelebrationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Celebration",
            id,
        }))?;

    let outcome = CelebrationRepo::move_entry(&state.pool, id, input.direction).await?;

    if outcome == MoveOutcome::Moved {
        tracing::info!(
            celebration_id = id,
            day_of_week = target.day_of_week,
            direction = ?input.direction,
            "Celebration moved",
        );
    }

    let day = CelebrationRepo::list_for_day(&state.pool, target.day_of_week).await?;

    Ok(Json(DataResponse { data: day }))
}

/// POST /api/v1/celebrations/{id}/toggle
pub async fn toggle_celebration(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let celebration = CelebrationRepo::toggle_active(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Celebration",
            id,
        }))?;

    tracing::info!(
        celebration_id = id,
        is_active = celebration.is_active,
        "Celebration visibility toggled",
    );

    Ok(Json(DataResponse { data: celebration }))
}

/// DELETE /api/v1/celebrations/{id}
///
/// Remove a celebration. The rest of its day keeps its indices.
pub async fn delete_celebration(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CelebrationRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Celebration",
            id,
        }));
    }

    tracing::info!(celebration_id = id, "Celebration deleted");

    Ok(StatusCode::NO_CONTENT)
}
