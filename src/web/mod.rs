//! Web layer for the browser UI.
//!
//! Server-side rendered with Askama templates. Copy-to-clipboard buttons
//! run in the browser (`static/app.js`).
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
