//! Application layer: link issuance, the submission flow and QR rendering.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - URL validation and mock short link issuance
//! - [`services::qr_service::QrService`] - QR code cards and SVG rendering
//! - [`submission::Submission`] - State machine behind the shortener form

pub mod services;
pub mod submission;
