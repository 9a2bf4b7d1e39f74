use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use galleria_core::AppError;

use crate::error::HttpAppError;
use crate::state::AppState;

/// List all image records, newest first.
///
/// The store returns records already ordered by `created` descending; they
/// are passed through verbatim. An empty collection is an empty array, not
/// an error.
#[tracing::instrument(skip(state), fields(operation = "list_images"))]
pub async fn list_images(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let images = state
        .metastore
        .list_images()
        .await
        .map_err(|e| HttpAppError(AppError::ListFailed(e.to_string())))?;

    Ok(Json(images))
}
