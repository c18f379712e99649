//! Root-level health check.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::error::AppResult;
use crate::state::AppState;

/// Health router mounted at the application root.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health
///
/// Liveness + database connectivity probe.
async fn health(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    parish_db::health_check(&state.pool).await?;

    Ok(Json(json!({ "status": "ok" })))
}
