//! Handler for media uploads.
//!
//! Files are validated (size ceiling, magic-byte sniff) before the store is
//! invoked; an invalid file never reaches storage. Multi-file uploads are
//! processed one at a time, and a failing file is reported in its slot
//! without aborting the rest of the batch.

use axum::extract::{Multipart, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use parish_core::media::{validate_image_upload, MediaKind};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the upload endpoint.
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    /// Upload call site: slide, photo, post_cover, priest, popup.
    pub kind: String,
}

/// Per-file upload result. Exactly one of `url` / `error` is set.
#[derive(Debug, Serialize)]
pub struct UploadResult {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/v1/media?kind=slide
///
/// Multipart upload. Each file part is validated and stored sequentially;
/// the response carries one entry per file, successful or not.
pub async fn upload_media(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let kind = MediaKind::from_name(&params.kind)?;

    let mut results: Vec<UploadResult> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        // Skip non-file parts (form metadata).
        if field.file_name().is_none() {
            continue;
        }
        let file_name = field.file_name().unwrap_or("unnamed").to_string();

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                results.push(failure(file_name, format!("Failed to read file: {e}")));
                continue;
            }
        };

        // Validation gate: a rejected file never reaches the store.
        let info = match validate_image_upload(kind, &bytes) {
            Ok(info) => info,
            Err(e) => {
                results.push(failure(file_name, e.to_string()));
                continue;
            }
        };

        match state
            .media_store
            .store(kind.folder(), info.extension(), &bytes)
            .await
        {
            Ok(stored) => {
                tracing::info!(
                    kind = kind.name(),
                    asset_id = %stored.asset_id,
                    size_bytes = bytes.len(),
                    "Media stored",
                );
                results.push(UploadResult {
                    file_name,
                    url: Some(stored.url),
                    asset_id: Some(stored.asset_id),
                    width: Some(info.width),
                    height: Some(info.height),
                    error: None,
                });
            }
            Err(e) => {
                tracing::error!(kind = kind.name(), error = %e, "Media store write failed");
                results.push(failure(file_name, "Storage write failed".to_string()));
            }
        }
    }

    if results.is_empty() {
        return Err(AppError::BadRequest("No file parts in upload".to_string()));
    }

    Ok(Json(DataResponse { data: results }))
}

fn failure(file_name: String, error: String) -> UploadResult {
    UploadResult {
        file_name,
        url: None,
        asset_id: None,
        width: None,
        height: None,
        error: Some(error),
    }
}
