//! QR samples page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::application::services::qr_service::{QrCard, RenderedQr};
use crate::state::AppState;

/// Template for the QR samples page.
///
/// Renders `templates/demo.html` with every variant of the sample card.
#[derive(Template, WebTemplate)]
#[template(path = "demo.html")]
pub struct DemoTemplate {
    pub title: String,
    pub value: String,
    pub variants: Vec<RenderedQr>,
}

/// Renders the QR samples page.
///
/// # Endpoint
///
/// `GET /demo`
pub async fn demo_handler(State(state): State<AppState>) -> impl IntoResponse {
    let card = QrCard::samples();
    let variants = state.qr_service.render_card(&card);

    DemoTemplate {
        title: card.title,
        value: card.value,
        variants,
    }
}
