//! # Document Verification Proxy
//!
//! `POST /api/verify` — validates submitted document text, forwards it to
//! the Dholakpur verification endpoint with the server-held bearer token,
//! and relays the proof envelope verbatim.
//!
//! Validation happens entirely before the upstream call: a rejected request
//! never touches the network. On upstream failure the Dholakpur status code
//! is relayed but the body is genericized; the upstream detail is logged,
//! not leaked.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use dvp_dholakpur_client::verify::VerifyDocumentRequest;
use dvp_dholakpur_client::DholakpurApiError;

use crate::error::AppError;
use crate::state::AppState;

use super::Validate;

/// Maximum accepted content length, in characters, before trimming.
pub const MAX_CONTENT_CHARS: usize = 10_000;
/// Minimum accepted content length, in characters, after trimming.
pub const MIN_CONTENT_CHARS: usize = 10;

/// Request to verify a document.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyRequest {
    /// Document text to verify. 10 to 10,000 characters.
    #[serde(default)]
    pub content: Option<String>,
    /// Optional document title, forwarded only when non-empty.
    #[serde(default)]
    pub title: Option<String>,
}

impl Validate for VerifyRequest {
    fn validate(&self) -> Result<(), String> {
        let content = match self.content.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => return Err("No content provided".into()),
        };
        if content.chars().count() > MAX_CONTENT_CHARS {
            return Err(format!("Content exceeds {MAX_CONTENT_CHARS} character limit"));
        }
        if content.trim().chars().count() < MIN_CONTENT_CHARS {
            return Err(format!(
                "Content must be at least {MIN_CONTENT_CHARS} characters long"
            ));
        }
        Ok(())
    }
}

/// Build the verification proxy router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/verify", post(verify_document))
}

/// POST /api/verify — Verify document text via the Dholakpur API.
#[utoipa::path(
    post,
    path = "/api/verify",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Verification proof envelope, relayed verbatim from the Dholakpur API"),
        (status = 400, description = "Missing, too short, or too long content"),
        (status = 500, description = "Bearer token not configured, or transport/parse failure"),
    ),
    tag = "verify"
)]
pub(crate) async fn verify_document(
    State(state): State<AppState>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    // A body that does not deserialize (content present but not a string)
    // gets the same answer as a missing content field.
    let Json(req) = payload.map_err(|_| AppError::InvalidInput("No content provided".into()))?;
    req.validate().map_err(AppError::InvalidInput)?;

    let client = state
        .client
        .as_ref()
        .ok_or_else(|| AppError::Configuration("Verification service not configured".into()))?;

    let upstream_req = VerifyDocumentRequest {
        content: req.content.unwrap_or_default(),
        // The portal treats an empty title as no title.
        title: req.title.filter(|t| !t.is_empty()),
    };

    match client.verify().verify(&upstream_req).await {
        Ok(body) => {
            tracing::info!(
                verified_issuer = body
                    .pointer("/proof/is_verified_issuer")
                    .and_then(|v| v.as_bool()),
                semantic_similarity = body
                    .pointer("/proof/semantic_similarity")
                    .and_then(|v| v.as_f64()),
                related = body
                    .pointer("/proof/related_vc_ids")
                    .and_then(|v| v.as_array())
                    .map(|a| a.len()),
                "verification completed"
            );
            Ok(Json(body))
        }
        Err(DholakpurApiError::ApiError {
            status,
            body,
            endpoint,
        }) => Err(AppError::upstream(
            status,
            "Verification service returned an error. Please try again.",
            format!("{endpoint} returned {status}: {body}"),
        )),
        Err(e) => Err(AppError::internal(
            "Verification failed. Please try again.",
            e,
        )),
    }
}
