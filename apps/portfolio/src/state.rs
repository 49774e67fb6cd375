use std::sync::Arc;

use crate::config::Config;
use crate::contact::ContactService;
use crate::content::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only site content, loaded once at startup.
    pub content: Arc<ContentStore>,
    /// Contact submission. Holds the pluggable relay when an endpoint is configured.
    pub contact: ContactService,
}

#[cfg(test)]
impl AppState {
    /// Built-in content, test config, and the given contact service.
    pub fn for_tests(contact: ContactService) -> Self {
        let config = Config::for_tests();
        Self {
            content: Arc::new(ContentStore::builtin()),
            contact,
            config,
        }
    }
}
