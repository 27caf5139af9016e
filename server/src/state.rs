//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest::Client` for the assistant proxy and the parsed
//! site config. Both are cheap to clone.

use std::sync::Arc;
use std::time::Duration;

use crate::config::SiteConfig;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    /// Build the upstream client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialised.
    pub fn new(config: SiteConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.assistant.timeout_secs))
            .connect_timeout(Duration::from_secs(config.assistant.connect_timeout_secs))
            .build()?;
        Ok(Self { http, config: Arc::new(config) })
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
