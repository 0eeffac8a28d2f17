//! A single user submission of a URL to shorten.

/// Transient request to shorten a URL.
///
/// Created per submission and discarded once a result or an error is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    pub original_url: String,
}

impl LinkRequest {
    /// Creates a request, trimming surrounding whitespace from the input.
    pub fn new(original_url: impl AsRef<str>) -> Self {
        Self {
            original_url: original_url.as_ref().trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_request_keeps_url() {
        let request = LinkRequest::new("https://example.com/path?q=1");
        assert_eq!(request.original_url, "https://example.com/path?q=1");
    }

    #[test]
    fn test_link_request_trims_whitespace() {
        let request = LinkRequest::new("  https://example.com \n");
        assert_eq!(request.original_url, "https://example.com");
    }
}
