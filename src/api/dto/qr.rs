//! Query parameters for the QR rendering endpoint.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::application::services::qr_service::QrOptions;
use crate::error::QrError;

/// Query string of `GET /api/qr`.
///
/// Colors must be percent-encoded (`fg=%234F46E5`).
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct QrQuery {
    #[validate(length(min = 1, max = 2048))]
    pub value: String,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 32, max = 1024))]
    pub size: Option<u32>,

    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub fg: Option<String>,

    #[serde(default)]
    pub bg: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub margin: Option<bool>,
}

impl QrQuery {
    /// Builds renderer options, using defaults for absent parameters.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::InvalidLevel`] for an unknown error correction level
    /// and [`QrError::InvalidColor`] for malformed colors.
    pub fn to_options(&self) -> Result<QrOptions, QrError> {
        let defaults = QrOptions::default();

        let options = QrOptions {
            size: self.size.unwrap_or(defaults.size),
            fg_color: self.fg.clone().unwrap_or(defaults.fg_color),
            bg_color: self.bg.clone().unwrap_or(defaults.bg_color),
            level: match &self.level {
                Some(level) => level.parse()?,
                None => defaults.level,
            },
            include_margin: self.margin.unwrap_or(defaults.include_margin),
            image: None,
        };

        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::qr_service::ErrorCorrection;

    fn query(value: &str) -> QrQuery {
        QrQuery {
            value: value.to_string(),
            size: None,
            level: None,
            fg: None,
            bg: None,
            margin: None,
        }
    }

    #[test]
    fn test_defaults() {
        let options = query("hello").to_options().unwrap();
        assert_eq!(options, QrOptions::default());
    }

    #[test]
    fn test_overrides() {
        let q = QrQuery {
            size: Some(256),
            level: Some("h".to_string()),
            fg: Some("#4F46E5".to_string()),
            bg: Some("#F8FAFC".to_string()),
            margin: Some(true),
            ..query("hello")
        };
        let options = q.to_options().unwrap();

        assert_eq!(options.size, 256);
        assert_eq!(options.level, ErrorCorrection::H);
        assert_eq!(options.fg_color, "#4F46E5");
        assert!(options.include_margin);
    }

    #[test]
    fn test_invalid_level() {
        let q = QrQuery {
            level: Some("Z".to_string()),
            ..query("hello")
        };
        assert!(matches!(q.to_options(), Err(QrError::InvalidLevel(_))));
    }

    #[test]
    fn test_size_range_validation() {
        let q = QrQuery {
            size: Some(8),
            ..query("hello")
        };
        assert!(q.validate().is_err());

        let q = QrQuery {
            size: Some(512),
            ..query("hello")
        };
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_empty_value_rejected() {
        assert!(query("").validate().is_err());
    }
}
