//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{demo_handler, index_handler, submit_handler};
use axum::{Router, routing::get};

/// Public HTML pages.
///
/// # Endpoints
///
/// - `GET  /`     - Shortener form
/// - `POST /`     - Form submission
/// - `GET  /demo` - QR code samples
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .route("/demo", get(demo_handler))
}
