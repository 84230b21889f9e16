//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The gateway is stateless across requests. The only shared resource is
//! the Dholakpur client, which holds the immutable upstream configuration
//! (base URL, bearer credential, timeout) loaded once at process start.
//! No request data is retained after the response is relayed.

use dvp_dholakpur_client::DholakpurClient;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the Dholakpur VC API. `None` when the bearer token is not
    /// configured; every proxy route then fails with its configuration
    /// error, per request, without attempting a network call.
    pub client: Option<DholakpurClient>,
    /// Application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create state with default configuration and no upstream client.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), None)
    }

    /// Create state with explicit configuration and an optional client.
    pub fn with_config(config: AppConfig, client: Option<DholakpurClient>) -> Self {
        Self { client, config }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
