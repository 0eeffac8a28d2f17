//! Handler for QR code rendering endpoint.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::qr::QrQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Renders a QR code for an arbitrary payload as SVG.
///
/// # Endpoint
///
/// `GET /api/qr?value=https%3A%2F%2Fexample.com&size=256&level=H&fg=%234F46E5&margin=true`
///
/// # Errors
///
/// Returns 400 Bad Request if parameters are out of range, a color or level
/// is malformed, or the payload does not fit in a QR symbol.
pub async fn qr_handler(
    State(state): State<AppState>,
    Query(query): Query<QrQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let options = query.to_options()?;
    let svg = state.qr_service.render(&query.value, &options)?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        svg,
    ))
}
