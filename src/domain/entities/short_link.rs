//! Result of a successful mock issuance.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// An original URL paired with its issued short URL.
///
/// Lives only for the current submission and is replaced, never merged,
/// by the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortLinkResult {
    pub original_url: String,
    pub short_url: String,
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

impl ShortLinkResult {
    /// Builds a result, joining `prefix` and `token` with a single slash.
    pub fn new(original_url: String, prefix: &str, token: String) -> Self {
        let short_url = format!("{}/{}", prefix.trim_end_matches('/'), token);
        Self {
            original_url,
            short_url,
            token,
            issued_at: Utc::now(),
        }
    }
}
