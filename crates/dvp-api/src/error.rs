//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps proxy failures to HTTP status codes and the flat `{"error": "..."}`
//! body the verification portal front end renders verbatim.
//! Never exposes upstream or internal error details in responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Application-level error type that implements [`IntoResponse`] for Axum.
///
/// The message carried by each variant is the safe, client-facing string.
/// Detail that must not cross the boundary (upstream bodies, transport
/// errors) is logged here and never serialized.
#[derive(Error, Debug)]
pub enum AppError {
    /// Client-supplied data failed a precondition (400). No upstream call
    /// was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A required server-side secret is missing (500). Not the caller's
    /// fault, but not actionable by them either.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The Dholakpur API answered with a non-success status, relayed to the
    /// caller with a genericized message.
    #[error("upstream Dholakpur API error ({status}): {detail}")]
    Upstream {
        status: u16,
        message: String,
        detail: String,
    },

    /// Unexpected transport or parse failure (500). `public` crosses the
    /// boundary; `detail` is logged server-side only.
    #[error("internal error: {detail}")]
    Internal { public: String, detail: String },
}

impl AppError {
    /// Construct an upstream error relaying `status`, with a safe `message`
    /// for the caller and the full upstream `detail` for the logs.
    pub fn upstream(status: u16, message: impl Into<String>, detail: impl std::fmt::Display) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    /// Construct an internal error with a safe public message.
    pub fn internal(public: impl Into<String>, detail: impl std::fmt::Display) -> Self {
        Self::Internal {
            public: public.into(),
            detail: detail.to_string(),
        }
    }

    /// The HTTP status code and client-facing message for this error.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Configuration(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::Upstream {
                status, message, ..
            } => (
                // An out-of-range status from upstream degrades to 502.
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                message.clone(),
            ),
            Self::Internal { public, .. } => (StatusCode::INTERNAL_SERVER_ERROR, public.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        // Full detail stays in the logs; only `message` crosses the boundary.
        match &self {
            Self::Internal { .. } => tracing::error!(error = %self, "internal proxy error"),
            Self::Upstream { .. } => tracing::error!(error = %self, "upstream API error"),
            Self::Configuration(_) => tracing::error!(error = %self, "service not configured"),
            Self::InvalidInput(_) => {}
        }

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
