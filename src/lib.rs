//! # QR Shortener
//!
//! A URL shortener demo: it validates a URL, issues a mock short link made of
//! a fixed prefix and a random six character token, and shows QR codes for
//! both. Nothing is stored and short links do not redirect anywhere.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Transient entities, randomness and clipboard seams
//! - **Application Layer** ([`application`]) - Link issuance, submission flow, QR rendering
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML pages rendered with Askama
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORT_URL_PREFIX="https://short.url"  # Optional
//! cargo run
//!
//! # Command line
//! cargo run --bin qrs -- shorten https://example.com
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, QrService};
    pub use crate::application::submission::{Submission, SubmissionState};
    pub use crate::domain::entities::{LinkRequest, ShortLinkResult};
    pub use crate::domain::random_source::{RandomSource, SeededRandomSource, ThreadRandomSource};
    pub use crate::error::{AppError, SubmissionError};
    pub use crate::state::AppState;
}
