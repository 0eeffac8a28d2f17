//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, QrService};
use crate::config::Config;
use crate::domain::random_source::ThreadRandomSource;

/// Immutable services shared by all requests.
///
/// Each request builds its own submission state; nothing here is mutated
/// after startup.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<ThreadRandomSource>>,
    pub qr_service: Arc<QrService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<ThreadRandomSource>>, qr_service: Arc<QrService>) -> Self {
        Self {
            link_service,
            qr_service,
        }
    }

    /// Builds the state from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(LinkService::new(
                Arc::new(ThreadRandomSource),
                config.short_url_prefix.clone(),
            )),
            Arc::new(QrService::new(config.qr_logo_src.clone())),
        )
    }
}
