//! Dholakpur API client error types.

/// Errors from Dholakpur VC API calls.
#[derive(Debug, thiserror::Error)]
pub enum DholakpurApiError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Dholakpur API returned a non-2xx status.
    #[error("Dholakpur API {endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

impl DholakpurApiError {
    /// The upstream HTTP status, when the API answered with a non-2xx code.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
