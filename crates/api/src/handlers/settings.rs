//! Handlers for site settings and the computed theme.
//!
//! All reads and writes go through the typed codec in
//! `parish_core::settings`; raw stored strings never leak to clients.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use parish_core::settings::SettingKey;
use parish_core::theme::compute_css_variables;
use parish_db::repositories::SettingsRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Decode the stored map into typed JSON, filling defaults for absent keys.
fn decode_all(stored: &BTreeMap<String, String>) -> BTreeMap<&'static str, Value> {
    SettingKey::ALL
        .iter()
        .map(|key| {
            let raw = stored
                .get(key.key_name())
                .map(String::as_str)
                .unwrap_or_else(|| key.default_raw());
            (key.key_name(), key.decode(raw))
        })
        .collect()
}

/// GET /api/v1/settings
///
/// Every known setting with its typed value (stored or default).
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stored = SettingsRepo::get_map(&state.pool).await?;

    Ok(Json(DataResponse {
        data: decode_all(&stored),
    }))
}

/// PUT /api/v1/settings
///
/// Bulk upsert. The body is a JSON object of key -> typed value; unknown
/// keys and type mismatches are rejected before anything is written.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(input): Json<BTreeMap<String, Value>>,
) -> AppResult<impl IntoResponse> {
    let mut entries = Vec::with_capacity(input.len());
    for (name, value) in &input {
        let key = SettingKey::from_key_name(name)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown setting key '{name}'")))?;
        let raw = key.encode(value)?;
        entries.push((key.key_name().to_string(), raw));
    }

    SettingsRepo::upsert_many(&state.pool, &entries).await?;

    tracing::info!(keys = entries.len(), "Settings updated");

    let stored = SettingsRepo::get_map(&state.pool).await?;

    Ok(Json(DataResponse {
        data: decode_all(&stored),
    }))
}

/// GET /api/v1/settings/theme
///
/// The CSS custom-property map the public site injects at render time.
pub async fn get_theme(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stored = SettingsRepo::get_map(&state.pool).await?;
    let variables = compute_css_variables(&stored);

    Ok(Json(DataResponse { data: variables }))
}
