//! Submission flow for the shortener form.
//!
//! A [`Submission`] is the explicit state record of one form: the current
//! input, the machine state and a busy flag. It only changes through
//! [`Submission::submit`] and [`Submission::set_url`].
//!
//! ```text
//! Idle ──submit──▶ Validating ──accept──▶ Success(ShortLinkResult)
//!                             └─reject──▶ Failed("Please enter a valid URL")
//! ```
//!
//! Success and Failed are not terminal: the next submit restarts the machine.

use crate::application::services::LinkService;
use crate::domain::entities::{LinkRequest, ShortLinkResult};
use crate::domain::random_source::RandomSource;
use crate::error::SubmissionError;

/// State of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Success(ShortLinkResult),
    Failed(String),
}

/// Local state of the shortener form.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    url: String,
    state: SubmissionState,
    busy: bool,
}

impl Submission {
    /// Creates an idle submission holding `url` as its input.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Replaces the current input without submitting it.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Returns the error message of a failed submission.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the result of a successful submission.
    pub fn result(&self) -> Option<&ShortLinkResult> {
        match &self.state {
            SubmissionState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Runs the current input through validation and issuance.
    ///
    /// Clears any prior error, validates the input and either stores the
    /// issued [`ShortLinkResult`] or the fixed error message. A failed
    /// submission drops the previous result.
    pub fn submit<R: RandomSource>(&mut self, links: &LinkService<R>) -> &SubmissionState {
        self.state = SubmissionState::Validating;
        self.busy = true;

        let request = LinkRequest::new(&self.url);
        self.state = if links.validate(&request.original_url) {
            SubmissionState::Success(links.issue(request))
        } else {
            tracing::debug!(url = %self.url, "Rejected submission");
            SubmissionState::Failed(SubmissionError::InvalidUrl.to_string())
        };

        self.busy = false;
        &self.state
    }
}
