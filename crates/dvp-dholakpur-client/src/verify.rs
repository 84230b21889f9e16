//! Typed client for the Dholakpur document verification endpoint.
//!
//! Base URL: `api.dholakpur.fun`
//!
//! | Method | Path         | Operation                      |
//! |--------|--------------|--------------------------------|
//! | POST   | `/vc/verify` | Verify submitted document text |

use serde::Serialize;

use crate::error::DholakpurApiError;

/// API path segment for the VC services.
const API_PREFIX: &str = "vc";

/// Request to verify a document via the Dholakpur API.
///
/// `title` is serialized only when present: the verification service
/// distinguishes an absent title from an empty one.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyDocumentRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Client for the Dholakpur verification endpoint.
#[derive(Debug, Clone)]
pub struct VerifyClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl VerifyClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Submit document text for verification.
    ///
    /// Calls `POST {base_url}/vc/verify` and returns the verification proof
    /// envelope exactly as the API produced it. The body is opaque to this
    /// client — the gateway relays it verbatim.
    ///
    /// Issues exactly one request; there is no retry.
    pub async fn verify(
        &self,
        req: &VerifyDocumentRequest,
    ) -> Result<serde_json::Value, DholakpurApiError> {
        let endpoint = "POST /vc/verify";
        let url = format!("{}{}/verify", self.base_url, API_PREFIX);

        let resp = self
            .http
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| DholakpurApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(DholakpurApiError::ApiError {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        resp.json()
            .await
            .map_err(|e| DholakpurApiError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })
    }
}
