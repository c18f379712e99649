//! Handlers for blog post management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use parish_core::error::CoreError;
use parish_core::slug::slug_or_generate;
use parish_core::types::DbId;
use parish_db::models::post::{CreatePost, UpdatePost};
use parish_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::query::IncludeInactiveParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/posts
///
/// List posts, newest first. Inactive posts require `?include_inactive=true`.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let posts = PostRepo::list(&state.pool, params.include_inactive).await?;

    Ok(Json(DataResponse { data: posts }))
}

/// POST /api/v1/posts
///
/// Create a post. When no slug is given one is generated from the title;
/// an explicit slug is stored verbatim.
pub async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("title", &input.title)?;
    require_non_empty("body", &input.body)?;

    let slug = slug_or_generate(input.slug.as_deref(), &input.title);
    let post = PostRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(post_id = post.id, slug = %post.slug, "Post created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    Ok(Json(DataResponse { data: post }))
}

/// PUT /api/v1/posts/{id}
///
/// Partially update a post's content fields.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        require_non_empty("title", title)?;
    }
    if let Some(ref body) = input.body {
        require_non_empty("body", body)?;
    }

    let post = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    tracing::info!(post_id = id, "Post updated");

    Ok(Json(DataResponse { data: post }))
}

/// POST /api/v1/posts/{id}/toggle
///
/// Flip `is_active`; every other field is left untouched.
pub async fn toggle_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::toggle_active(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    tracing::info!(post_id = id, is_active = post.is_active, "Post visibility toggled");

    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PostRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Post", id }));
    }

    tracing::info!(post_id = id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}
