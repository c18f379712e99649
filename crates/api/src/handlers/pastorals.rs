//! Handlers for pastoral group management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use parish_core::error::CoreError;
use parish_core::ordering::MoveOutcome;
use parish_core::types::DbId;
use parish_db::models::pastoral::{CreatePastoral, UpdatePastoral};
use parish_db::repositories::PastoralRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{require_non_empty, MoveRequest};
use crate::query::IncludeInactiveParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/pastorals
///
/// List pastoral groups in display order.
pub async fn list_pastorals(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let pastorals = PastoralRepo::list(&state.pool, params.include_inactive).await?;

    Ok(Json(DataResponse { data: pastorals }))
}

/// POST /api/v1/pastorals
///
/// Create a pastoral group, appended to the end of the list.
pub async fn create_pastoral(
    State(state): State<AppState>,
    Json(input): Json<CreatePastoral>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("name", &input.name)?;

    let pastoral = PastoralRepo::create(&state.pool, &input).await?;

    tracing::info!(
        pastoral_id = pastoral.id,
        order_index = pastoral.order_index,
        "Pastoral group created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: pastoral })))
}

/// GET /api/v1/pastorals/{id}
pub async fn get_pastoral(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pastoral = PastoralRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pastoral",
            id,
        }))?;

    Ok(Json(DataResponse { data: pastoral }))
}

/// PUT /api/v1/pastorals/{id}
pub async fn update_pastoral(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePastoral>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.name {
        require_non_empty("name", name)?;
    }

    let pastoral = PastoralRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pastoral",
            id,
        }))?;

    tracing::info!(pastoral_id = id, "Pastoral group updated");

    Ok(Json(DataResponse { data: pastoral }))
}

/// POST /api/v1/pastorals/{id}/move
///
/// Swap the group with its neighbor in the requested direction. Edge moves
/// are silent no-ops; the whole re-read list is returned.
pub async fn move_pastoral(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = PastoralRepo::move_entry(&state.pool, id, input.direction).await?;

    if outcome == MoveOutcome::NotFound {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Pastoral",
            id,
        }));
    }

    if outcome == MoveOutcome::Moved {
        tracing::info!(pastoral_id = id, direction = ?input.direction, "Pastoral group moved");
    }

    let pastorals = PastoralRepo::list(&state.pool, true).await?;

    Ok(Json(DataResponse { data: pastorals }))
}

/// POST /api/v1/pastorals/{id}/toggle
pub async fn toggle_pastoral(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pastoral = PastoralRepo::toggle_active(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pastoral",
            id,
        }))?;

    tracing::info!(
        pastoral_id = id,
        is_active = pastoral.is_active,
        "Pastoral group visibility toggled",
    );

    Ok(Json(DataResponse { data: pastoral }))
}

/// DELETE /api/v1/pastorals/{id}
pub async fn delete_pastoral(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PastoralRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Pastoral",
            id,
        }));
    }

    tracing::info!(pastoral_id = id, "Pastoral group deleted");

    Ok(StatusCode::NO_CONTENT)
}
