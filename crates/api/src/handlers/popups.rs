//! Handlers for announcement popups.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use parish_core::error::CoreError;
use parish_core::types::DbId;
use parish_db::models::popup::{CreatePopup, UpdatePopup};
use parish_db::repositories::PopupRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::query::IncludeInactiveParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/popups
pub async fn list_popups(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let popups = PopupRepo::list(&state.pool, params.include_inactive).await?;

    Ok(Json(DataResponse { data: popups }))
}

/// POST /api/v1/popups
pub async fn create_popup(
    State(state): State<AppState>,
    Json(input): Json<CreatePopup>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("title", &input.title)?;
    require_non_empty("image_url", &input.image_url)?;

    if let (Some(starts), Some(ends)) = (input.starts_on, input.ends_on) {
        if ends < starts {
            return Err(CoreError::Validation(
                "ends_on must not be before starts_on".to_string(),
            )
            .into());
        }
    }

    let popup = PopupRepo::create(&state.pool, &input).await?;

    tracing::info!(popup_id = popup.id, title = %popup.title, "Popup created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: popup })))
}

/// GET /api/v1/popups/{id}
pub async fn get_popup(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let popup = PopupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Popup",
            id,
        }))?;

    Ok(Json(DataResponse { data: popup }))
}

/// PUT /api/v1/popups/{id}
pub async fn update_popup(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePopup>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        require_non_empty("title", title)?;
    }

    let popup = PopupRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Popup",
            id,
        }))?;

    tracing::info!(popup_id = id, "Popup updated");

    Ok(Json(DataResponse { data: popup }))
}

/// POST /api/v1/popups/{id}/toggle
///
/// Flip `is_active`; every other field is left untouched.
pub async fn toggle_popup(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let popup = PopupRepo::toggle_active(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Popup",
            id,
        }))?;

    tracing::info!(popup_id = id, is_active = popup.is_active, "Popup visibility toggled");

    Ok(Json(DataResponse { data: popup }))
}

/// DELETE /api/v1/popups/{id}
pub async fn delete_popup(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PopupRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Popup",
            id,
        }));
    }

    tracing::info!(popup_id = id, "Popup deleted");

    Ok(StatusCode::NO_CONTENT)
}
