//! Dholakpur API client configuration.
//!
//! Configures the base URL, bearer credential, and request timeout for the
//! Dholakpur VC API. Defaults point to the production endpoint. Override via
//! environment variables or explicit construction for staging/testing.

use url::Url;
use zeroize::Zeroizing;

/// Configuration for connecting to the Dholakpur VC API.
///
/// Custom `Debug` implementation redacts the `api_token` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct DholakpurConfig {
    /// Base URL for the Dholakpur VC API.
    /// Default: <https://api.dholakpur.fun>
    pub api_url: Url,
    /// Bearer token for API authentication.
    pub api_token: Zeroizing<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for DholakpurConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DholakpurConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl DholakpurConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `DHOLAKPUR_API_TOKEN` (required)
    /// - `DHOLAKPUR_API_URL` (default: `https://api.dholakpur.fun`)
    /// - `DHOLAKPUR_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_token =
            std::env::var("DHOLAKPUR_API_TOKEN").map_err(|_| ConfigError::MissingToken)?;

        Ok(Self {
            api_url: env_url("DHOLAKPUR_API_URL", "https://api.dholakpur.fun")?,
            api_token: Zeroizing::new(api_token),
            timeout_secs: std::env::var("DHOLAKPUR_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create a configuration pointing to a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base_url` cannot be parsed.
    pub fn local_mock(base_url: &str, token: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: Url::parse(base_url)
                .map_err(|e| ConfigError::InvalidUrl("base_url".to_string(), e.to_string()))?,
            api_token: Zeroizing::new(token.to_string()),
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DHOLAKPUR_API_TOKEN environment variable is required")]
    MissingToken,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("API token is not a valid header value")]
    InvalidToken,
}
