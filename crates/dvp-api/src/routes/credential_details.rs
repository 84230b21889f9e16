//! # Credential-Detail Proxy
//!
//! `POST /api/fetch-credential-details` — fetches the full credential
//! document for one VC id. Unlike the fan-out route, an upstream failure
//! here is the caller's answer: the Dholakpur status code is relayed with
//! a formatted message built from its reason phrase.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use dvp_dholakpur_client::DholakpurApiError;

use crate::error::AppError;
use crate::state::AppState;

use super::Validate;

/// Request to fetch one credential document.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FetchCredentialDetailsRequest {
    /// The credential id to resolve.
    #[serde(default)]
    pub vc_id: Option<String>,
}

impl Validate for FetchCredentialDetailsRequest {
    fn validate(&self) -> Result<(), String> {
        match self.vc_id.as_deref() {
            Some(id) if !id.is_empty() => Ok(()),
            _ => Err("VC ID is required".into()),
        }
    }
}

/// Build the credential-detail router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/fetch-credential-details",
        post(fetch_credential_details),
    )
}

/// POST /api/fetch-credential-details — Fetch one credential document.
#[utoipa::path(
    post,
    path = "/api/fetch-credential-details",
    request_body = FetchCredentialDetailsRequest,
    responses(
        (status = 200, description = "Credential document envelope, relayed verbatim"),
        (status = 400, description = "Missing vcId"),
        (status = 500, description = "Bearer token not configured, or transport/parse failure"),
    ),
    tag = "documents"
)]
pub(crate) async fn fetch_credential_details(
    State(state): State<AppState>,
    payload: Result<Json<FetchCredentialDetailsRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(req) = payload.map_err(|_| AppError::InvalidInput("VC ID is required".into()))?;
    req.validate().map_err(AppError::InvalidInput)?;
    let vc_id = req.vc_id.unwrap_or_default();

    let client = state
        .client
        .as_ref()
        .ok_or_else(|| AppError::Configuration("API token not configured".into()))?;

    match client.documents().fetch_related(&vc_id).await {
        Ok(document) => Ok(Json(document)),
        Err(DholakpurApiError::ApiError {
            status,
            body,
            endpoint,
        }) => {
            let reason = StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown");
            Err(AppError::upstream(
                status,
                format!("Failed to fetch credential details: {reason}"),
                format!("{endpoint} returned {status}: {body}"),
            ))
        }
        Err(e) => Err(AppError::internal("Failed to fetch credential details", e)),
    }
}
