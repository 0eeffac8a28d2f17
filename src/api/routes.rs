//! API route configuration.

use crate::api::handlers::{qr_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /shorten` - Issue a mock short link
/// - `GET  /qr`      - Render a QR code as SVG
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/qr", get(qr_handler))
}
