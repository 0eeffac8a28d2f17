//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET/POST /`  - Shortener form (HTML)
//! - `GET  /demo`  - QR code samples (HTML)
//! - `/api/*`      - JSON API and QR rendering
//! - `GET  /health` - Health check
//! - `/static/*`   - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::error::AppError;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with every route and the tracing layer.
///
/// `static_dir` is served under `/static`.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(api::middleware::tracing::layer())
}

/// Constructs the application router with trailing slash normalization.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, static_dir))
}

async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Page not found", json!({ "path": uri.path() }))
}
