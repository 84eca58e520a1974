//! Application state shared across handlers

use crate::config::Settings;
use crate::graph::{GraphApi, InterestSource};
use crate::network::HttpClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings, read-only after startup
    pub settings: Arc<Settings>,
    /// Where interest searches are sent
    pub source: Arc<dyn InterestSource>,
}

impl AppState {
    /// Create application state backed by the Graph API
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        let source = Arc::new(GraphApi::new(client, &settings.graph));
        Self::with_source(settings, source)
    }

    /// Create application state with a custom interest source
    pub fn with_source(settings: Settings, source: Arc<dyn InterestSource>) -> Self {
        Self {
            settings: Arc::new(settings),
            source,
        }
    }

    /// Whether an upstream credential is configured
    pub fn has_token(&self) -> bool {
        self.settings.graph.token().is_some()
    }
}
