//! Shared application state.
//!
//! Cloned into every handler. Everything in here is read-only after
//! startup; content is resolved per request from the store.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::email::Mailer;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub config: Arc<SiteConfig>,
    /// Outbound mail. `None` when no API key was supplied, in which case the
    /// contact endpoint answers with a configuration error.
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl AppState {
    pub fn new(store: ContentStore, config: SiteConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            mailer: None,
        }
    }

    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }
}
