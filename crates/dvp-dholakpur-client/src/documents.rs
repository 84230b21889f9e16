//! Typed client for the Dholakpur credential document endpoint.
//!
//! Base URL: `api.dholakpur.fun`
//!
//! | Method | Path                               | Operation                     |
//! |--------|------------------------------------|-------------------------------|
//! | GET    | `/vc/fetch/related/docs/{vcId}`    | Fetch one credential document |

use crate::error::DholakpurApiError;

/// API path segment for the VC services.
const API_PREFIX: &str = "vc";

/// Client for the Dholakpur credential document endpoint.
#[derive(Debug, Clone)]
pub struct DocumentClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl DocumentClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Fetch the credential document for one VC id.
    ///
    /// Calls `GET {base_url}/vc/fetch/related/docs/{vc_id}` and returns the
    /// `{message, did, document}` envelope exactly as the API produced it.
    ///
    /// Any non-2xx status is an error. Callers decide whether that aborts
    /// the request (credential detail lookup) or merely drops one item
    /// (related-document fan-out).
    pub async fn fetch_related(&self, vc_id: &str) -> Result<serde_json::Value, DholakpurApiError> {
        let endpoint = format!("GET /vc/fetch/related/docs/{vc_id}");
        let url = format!("{}{}/fetch/related/docs/{vc_id}", self.base_url, API_PREFIX);

        tracing::debug!(vc_id, "fetching credential document");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DholakpurApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(DholakpurApiError::ApiError {
                endpoint,
                status,
                body,
            });
        }

        resp.json()
            .await
            .map_err(|e| DholakpurApiError::Deserialization { endpoint, source: e })
    }
}
