//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only carries what the `/api` forwarder needs: one pooled HTTP client and
//! the configured upstream base URL.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::error::ServerError;

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: Option<Arc<str>>,
}

impl AppState {
    /// Build state from parsed config.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::HttpClientBuild`] if the TLS backend fails to
    /// initialize.
    pub fn new(config: &ServerConfig) -> Result<Self, ServerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ServerError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, upstream: config.api_upstream.as_deref().map(Arc::from) })
    }
}
