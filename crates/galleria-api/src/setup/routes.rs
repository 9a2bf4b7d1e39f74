//! Route configuration and setup.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use galleria_core::Config;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Headroom on top of the upload ceiling for multipart framing, so the
/// transport-level body limit never fires before the pipeline's own size
/// check on a file that is merely at the ceiling.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let body_limit = config.max_upload_bytes as usize + MULTIPART_OVERHEAD_BYTES;

    let app = Router::new()
        .route("/upload", post(handlers::upload::upload_image))
        .route("/api/images", get(handlers::images::list_images))
        .route("/health", get(health_check))
        .with_state(state)
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Liveness probe - process is running.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
