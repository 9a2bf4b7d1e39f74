use std::sync::Arc;

use axum::{extract::Multipart, extract::State, response::IntoResponse, Json};
use galleria_core::models::ImageRecord;
use serde::Serialize;

use crate::error::HttpAppError;
use crate::intake::IntakeService;
use crate::state::AppState;

/// Successful upload response: the stored record plus a confirmation flag.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub data: ImageRecord,
}

/// Upload image handler
///
/// Delegates to `IntakeService` for extraction, validation, disk storage,
/// and metadata persistence, then returns the stored record.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_image"))]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let service = IntakeService::new(&state);
    let record = service.handle_upload(multipart).await?;

    Ok(Json(UploadResponse {
        success: true,
        message: "Image uploaded successfully".to_string(),
        data: record,
    }))
}
