//! Error types shared across the application.
//!
//! - [`SubmissionError`] - the single business error of the link issuer
//! - [`QrError`] - QR rendering failures
//! - [`ClipboardError`] - clipboard failures (logged, never surfaced)
//! - [`AppError`] - HTTP-facing error with a JSON body

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Fixed message shown when a submitted URL is rejected.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

/// Failure of a link submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Please enter a valid URL")]
    InvalidUrl,
}

/// Errors produced while rendering QR codes.
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("Failed to encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("Invalid color '{0}', expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("Unknown error correction level '{0}', expected one of L, M, Q, H")]
    InvalidLevel(String),

    #[error("QR code size must be greater than 0")]
    InvalidSize,
}

/// Errors raised by clipboard backends.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write clipboard: {0}")]
    Write(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned by the API.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Converts the error into its status code and JSON payload.
    pub fn to_error_info(&self) -> (StatusCode, ErrorInfo) {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        (
            status,
            ErrorInfo {
                code,
                message: message.clone(),
                details: details.clone(),
            },
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.to_error_info();

        if status.is_server_error() {
            tracing::error!(code = error.code, "{}", error.message);
        }

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<SubmissionError> for AppError {
    fn from(e: SubmissionError) -> Self {
        match e {
            SubmissionError::InvalidUrl => {
                AppError::bad_request(e.to_string(), json!({ "reason": "invalid_url" }))
            }
        }
    }
}

impl From<QrError> for AppError {
    fn from(e: QrError) -> Self {
        AppError::bad_request("Unable to render QR code", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let errors = e.field_errors();
        let fields: Vec<&str> = errors.keys().map(|k| k.as_ref()).collect();
        AppError::bad_request("Invalid request parameters", json!({ "fields": fields }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message_is_fixed() {
        assert_eq!(SubmissionError::InvalidUrl.to_string(), INVALID_URL_MESSAGE);
    }

    #[test]
    fn test_submission_error_maps_to_validation() {
        let err: AppError = SubmissionError::InvalidUrl.into();
        let (status, info) = err.to_error_info();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, INVALID_URL_MESSAGE);
        assert_eq!(info.details["reason"], "invalid_url");
    }

    #[test]
    fn test_qr_error_maps_to_bad_request() {
        let err: AppError = QrError::InvalidLevel("X".to_string()).into();
        let (status, info) = err.to_error_info();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(info.details["reason"].as_str().unwrap().contains("'X'"));
    }

    #[test]
    fn test_validation_errors_list_fields() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("size", validator::ValidationError::new("range"));

        let err: AppError = errors.into();
        let (status, info) = err.to_error_info();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(info.message, "Invalid request parameters");
        assert_eq!(info.details["fields"], json!(["size"]));
    }

    #[test]
    fn test_internal_error_status() {
        let err = AppError::internal("boom", json!({}));
        let (status, info) = err.to_error_info();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(info.code, "internal_error");
    }
}
