//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Issues a mock short link for a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "short_url": "https://short.url/k3x9q1",
///   "token": "k3x9q1",
///   "issued_at": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with the message "Please enter a valid URL" if the
/// URL is not a well-formed absolute URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let result = state.link_service.shorten(&payload.url)?;
    tracing::info!(short_url = %result.short_url, "Issued short link");

    Ok(Json(result.into()))
}
