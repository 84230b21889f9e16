//! # dvp-dholakpur-client -- Typed Rust client for the Dholakpur VC API
//!
//! Provides typed access to the two Dholakpur verification endpoints:
//! - **Verification** via `POST /vc/verify`
//! - **Credential documents** via `GET /vc/fetch/related/docs/{vcId}`
//!
//! ## Architecture
//!
//! This crate is the ONLY path by which the DVP gateway talks to the
//! Dholakpur API. The bearer credential is installed as a default header at
//! client construction time and never travels through request-scoped code.
//!
//! Response bodies are returned as opaque `serde_json::Value` — the gateway
//! relays them verbatim and the verification semantics are owned entirely by
//! the upstream service.

pub mod config;
pub mod documents;
pub mod error;
pub mod verify;

pub use config::DholakpurConfig;
pub use error::DholakpurApiError;

use std::time::Duration;

/// Top-level Dholakpur API client. Holds sub-clients for each endpoint group.
#[derive(Debug, Clone)]
pub struct DholakpurClient {
    verify: verify::VerifyClient,
    documents: documents::DocumentClient,
}

impl DholakpurClient {
    /// Create a new Dholakpur API client from configuration.
    pub fn new(config: DholakpurConfig) -> Result<Self, DholakpurApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    reqwest::header::HeaderValue::from_str(&format!(
                        "Bearer {}",
                        config.api_token.as_str()
                    ))
                    .map_err(|_| DholakpurApiError::Config(config::ConfigError::InvalidToken))?,
                );
                headers
            })
            .build()
            .map_err(|e| DholakpurApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            verify: verify::VerifyClient::new(http.clone(), config.api_url.clone()),
            documents: documents::DocumentClient::new(http, config.api_url),
        })
    }

    /// Access the verification client.
    pub fn verify(&self) -> &verify::VerifyClient {
        &self.verify
    }

    /// Access the credential document client.
    pub fn documents(&self) -> &documents::DocumentClient {
        &self.documents
    }
}
