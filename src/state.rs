//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the immutable host config and one pooled `reqwest::Client` used for
//! every forwarded `/api` request. Nothing in it is mutated after startup.

use std::sync::Arc;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with an HTTP client honouring the upstream timeout.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` builder error if the TLS backend cannot start.
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.upstream_timeout).build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
