//! Handlers for priest management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use parish_core::error::CoreError;
use parish_core::types::DbId;
use parish_db::models::priest::{CreatePriest, UpdatePriest};
use parish_db::repositories::PriestRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::query::IncludeInactiveParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/priests
pub async fn list_priests(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let priests = PriestRepo::list(&state.pool, params.include_inactive).await?;

    Ok(Json(DataResponse { data: priests }))
}

/// POST /api/v1/priests
pub async fn create_priest(
    State(state): State<AppState>,
    Json(input): Json<CreatePriest>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("name", &input.name)?;

    let priest = PriestRepo::create(&state.pool, &input).await?;

    tracing::info!(priest_id = priest.id, name = %priest.name, "Priest created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: priest })))
}

/// GET /api/v1/priests/{id}
pub async fn get_priest(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let priest = PriestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Priest",
            id,
        }))?;

    Ok(Json(DataResponse { data: priest }))
}

/// PUT /api/v1/priests/{id}
pub async fn update_priest(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePriest>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.name {
        require_non_empty("name", name)?;
    }

    let priest = PriestRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Priest",
            id,
        }))?;

    tracing::info!(priest_id = id, "Priest updated");

    Ok(Json(DataResponse { data: priest }))
}

/// POST /api/v1/priests/{id}/toggle
pub async fn toggle_priest(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let priest = PriestRepo::toggle_active(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Priest",
            id,
        }))?;

    tracing::info!(priest_id = id, is_active = priest.is_active, "Priest visibility toggled");

    Ok(Json(DataResponse { data: priest }))
}

/// DELETE /api/v1/priests/{id}
pub async fn delete_priest(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PriestRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Priest",
            id,
        }));
    }

    tracing::info!(priest_id = id, "Priest deleted");

    Ok(StatusCode::NO_CONTENT)
}
