//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLinkResult;

/// Request to shorten a single URL.
///
/// The URL itself is checked by the link issuer so that every rejection
/// carries the same message.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(max = 8192))]
    pub url: String,
}

/// Issued short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

impl From<ShortLinkResult> for ShortenResponse {
    fn from(result: ShortLinkResult) -> Self {
        Self {
            original_url: result.original_url,
            short_url: result.short_url,
            token: result.token,
            issued_at: result.issued_at,
        }
    }
}
