//! Shortener form page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse};
use serde::Deserialize;

use crate::application::services::QrService;
use crate::application::services::qr_service::{QrCard, RenderedQr};
use crate::application::submission::Submission;
use crate::state::AppState;

/// Form body posted by the shortener page.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}

/// QR cards and URLs shown after a successful submission.
pub struct LinkView {
    pub original_url: String,
    pub short_url: String,
    pub original_qr: Vec<RenderedQr>,
    pub short_qr: Vec<RenderedQr>,
}

/// Template for the shortener page.
///
/// Renders `templates/index.html` with:
/// - URL input form
/// - Error alert for rejected submissions
/// - QR codes, copy and open actions for both URLs
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub url: String,
    pub busy: bool,
    pub error: Option<String>,
    pub link: Option<LinkView>,
}

impl IndexTemplate {
    fn from_submission(submission: &Submission, qr: &QrService) -> Self {
        let link = submission.result().map(|result| LinkView {
            original_url: result.original_url.clone(),
            short_url: result.short_url.clone(),
            original_qr: qr.render_card(&QrCard::compact(result.original_url.as_str())),
            short_qr: qr.render_card(&QrCard::compact(result.short_url.as_str())),
        });

        Self {
            url: submission.url().to_string(),
            busy: submission.is_busy(),
            error: submission.error().map(str::to_string),
            link,
        }
    }
}

/// Renders the empty shortener form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {
        url: String::new(),
        busy: false,
        error: None,
        link: None,
    }
}

/// Runs a form submission and renders its outcome.
///
/// # Endpoint
///
/// `POST /`
///
/// Each request owns a fresh [`Submission`]; a rejected URL renders the
/// form again with the error alert and no result.
pub async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> impl IntoResponse {
    let mut submission = Submission::new(form.url);
    submission.submit(&state.link_service);

    if let Some(result) = submission.result() {
        tracing::info!(short_url = %result.short_url, "Issued short link");
    }

    IndexTemplate::from_submission(&submission, &state.qr_service)
}
