//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the upstream HTTP client and the host config; nothing per-request.

use std::sync::Arc;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<Config>,
}

impl AppState {
    /// Build the shared client with the configured proxy timeouts.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error when the TLS backend cannot be initialised.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .build()?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
