//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `SHORT_URL_PREFIX` - Prefix of issued short links (default: `https://short.url`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `QR_LOGO_SRC` - Image drawn over high error correction QR codes
//!   (default: `/static/logo.svg`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//!
//! Variables can also be placed in a `.env` file, loaded by `dotenvy` in `main.rs`.

use anyhow::Result;
use std::env;

use crate::application::services::link_service::DEFAULT_SHORT_URL_PREFIX;
use crate::utils::url_validator::is_valid_url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Prefix joined with the token to form short URLs, without trailing slash.
    pub short_url_prefix: String,
    pub log_level: String,
    pub log_format: String,
    /// Source of the image overlaid on high error correction QR codes.
    pub qr_logo_src: String,
    pub static_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            short_url_prefix: DEFAULT_SHORT_URL_PREFIX.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            qr_logo_src: "/static/logo.svg".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let short_url_prefix = env::var("SHORT_URL_PREFIX")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.short_url_prefix);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let qr_logo_src = env::var("QR_LOGO_SRC").unwrap_or(defaults.qr_logo_src);
        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);

        Self {
            listen_addr,
            short_url_prefix,
            log_level,
            log_format,
            qr_logo_src,
            static_dir,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `short_url_prefix` is not an absolute URL with a host
    /// - `qr_logo_src` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !is_valid_url(&self.short_url_prefix) {
            anyhow::bail!(
                "SHORT_URL_PREFIX must be an absolute URL such as 'https://short.url', got '{}'",
                self.short_url_prefix
            );
        }

        if self.short_url_prefix.contains(['?', '#']) {
            anyhow::bail!(
                "SHORT_URL_PREFIX must not contain a query or fragment, got '{}'",
                self.short_url_prefix
            );
        }

        if self.qr_logo_src.trim().is_empty() {
            anyhow::bail!("QR_LOGO_SRC must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Short URL prefix: {}", self.short_url_prefix);
        tracing::info!("  QR logo: {}", self.qr_logo_src);
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
