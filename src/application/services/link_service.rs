//! Mock short link issuance.

use std::sync::Arc;

use crate::domain::entities::{LinkRequest, ShortLinkResult};
use crate::domain::random_source::RandomSource;
use crate::error::SubmissionError;
use crate::utils::code_generator::generate_token;
use crate::utils::url_validator::is_valid_url;

/// Default prefix of issued short URLs.
pub const DEFAULT_SHORT_URL_PREFIX: &str = "https://short.url";

/// Service issuing short links without any backing registry.
///
/// Nothing records the mapping between an original URL and its token, so
/// issuing twice for the same URL yields two independent tokens.
pub struct LinkService<R: RandomSource> {
    random: Arc<R>,
    prefix: String,
}

impl<R: RandomSource> LinkService<R> {
    /// Creates a new link service issuing URLs under `prefix`.
    pub fn new(random: Arc<R>, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into().trim_end_matches('/').to_string();
        Self { random, prefix }
    }

    /// Returns the short-domain prefix, without trailing slash.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Classifies `input` as a well-formed absolute URL or not.
    pub fn validate(&self, input: &str) -> bool {
        is_valid_url(input)
    }

    /// Issues a short link for an already validated request.
    ///
    /// The request is not validated again and this cannot fail.
    pub fn issue(&self, request: LinkRequest) -> ShortLinkResult {
        let token = generate_token(self.random.as_ref());
        tracing::debug!(token = %token, "Issued short token");
        ShortLinkResult::new(request.original_url, &self.prefix, token)
    }

    /// Validates `input` and issues a short link for it.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::InvalidUrl`] if the input is not a
    /// well-formed absolute URL.
    pub fn shorten(&self, input: &str) -> Result<ShortLinkResult, SubmissionError> {
        let request = LinkRequest::new(input);

        if !self.validate(&request.original_url) {
            return Err(SubmissionError::InvalidUrl);
        }

        Ok(self.issue(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::random_source::{MockRandomSource, SeededRandomSource, ThreadRandomSource};
    use crate::utils::code_generator::is_valid_token;

    fn service() -> LinkService<ThreadRandomSource> {
        LinkService::new(Arc::new(ThreadRandomSource), DEFAULT_SHORT_URL_PREFIX)
    }

    #[test]
    fn test_shorten_valid_url() {
        let result = service().shorten("https://example.com").unwrap();

        assert_eq!(result.original_url, "https://example.com");
        assert!(result.short_url.starts_with("https://short.url/"));

        let token = result.short_url.trim_start_matches("https://short.url/");
        assert_eq!(token, result.token);
        assert!(is_valid_token(token));
    }

    #[test]
    fn test_shorten_rejects_plain_text() {
        let result = service().shorten("not a url");
        assert_eq!(result.unwrap_err(), SubmissionError::InvalidUrl);
    }

    #[test]
    fn test_shorten_rejects_empty() {
        let result = service().shorten("");
        assert_eq!(result.unwrap_err(), SubmissionError::InvalidUrl);
    }

    #[test]
    fn test_shorten_is_not_memoized() {
        let service = LinkService::new(Arc::new(SeededRandomSource::new(1)), "https://short.url");

        let first = service.shorten("https://example.com").unwrap();
        let second = service.shorten("https://example.com").unwrap();

        assert_ne!(first.token, second.token);
    }

    #[test]
    fn test_issue_uses_random_source() {
        let mut mock = MockRandomSource::new();
        mock.expect_next_below().times(6).returning(|_| 1);

        let service = LinkService::new(Arc::new(mock), "https://short.url");
        let result = service.issue(LinkRequest::new("https://example.com"));

        assert_eq!(result.short_url, "https://short.url/111111");
    }

    #[test]
    fn test_invalid_url_never_draws_randomness() {
        let mut mock = MockRandomSource::new();
        mock.expect_next_below().times(0);

        let service = LinkService::new(Arc::new(mock), "https://short.url");
        assert!(service.shorten("example.com").is_err());
    }

    #[test]
    fn test_custom_prefix_trailing_slash() {
        let service = LinkService::new(Arc::new(ThreadRandomSource), "https://s.example.com/");
        assert_eq!(service.prefix(), "https://s.example.com");

        let result = service.shorten("https://example.com").unwrap();
        assert!(result.short_url.starts_with("https://s.example.com/"));
        assert!(!result.short_url.contains(".com//"));
    }

    #[test]
    fn test_shorten_trims_input() {
        let result = service().shorten("  https://example.com/page  ").unwrap();
        assert_eq!(result.original_url, "https://example.com/page");
    }
}
