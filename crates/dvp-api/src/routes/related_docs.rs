//! # Related-Documents Fan-out Proxy
//!
//! `POST /api/fetch-related-docs` — given N VC ids, fetches each credential
//! document concurrently and returns the ones that succeeded, in the same
//! relative order as their ids in the input.
//!
//! Per-item failure isolation: a non-success status, transport error, or
//! parse error for one id drops that id from the result set and never
//! aborts the batch. The handler resumes only after all N outcomes are
//! known; all-fail yields `{"documents": []}` with status 200.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

use super::Validate;

/// Request to fetch the documents behind a list of VC ids.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FetchRelatedDocsRequest {
    /// VC ids to resolve, typically the `related_vc_ids` of a verification
    /// proof. Fetched as given: order preserved, duplicates included.
    #[serde(default)]
    pub vc_ids: Option<Vec<String>>,
}

/// The surviving subset of requested documents.
#[derive(Debug, Serialize)]
pub struct FetchRelatedDocsResponse {
    pub documents: Vec<serde_json::Value>,
}

impl Validate for FetchRelatedDocsRequest {
    fn validate(&self) -> Result<(), String> {
        match self.vc_ids.as_deref() {
            Some(ids) if !ids.is_empty() => Ok(()),
            _ => Err("No VC IDs provided".into()),
        }
    }
}

/// Build the related-documents fan-out router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/fetch-related-docs", post(fetch_related_docs))
}

/// POST /api/fetch-related-docs — Fetch N credential documents in parallel.
#[utoipa::path(
    post,
    path = "/api/fetch-related-docs",
    request_body = FetchRelatedDocsRequest,
    responses(
        (status = 200, description = "Documents that could be fetched, in input order; failed ids are omitted"),
        (status = 400, description = "Missing, empty, or non-array vcIds"),
        (status = 500, description = "Bearer token not configured"),
    ),
    tag = "documents"
)]
pub(crate) async fn fetch_related_docs(
    State(state): State<AppState>,
    payload: Result<Json<FetchRelatedDocsRequest>, JsonRejection>,
) -> Result<Json<FetchRelatedDocsResponse>, AppError> {
    let Json(req) = payload.map_err(|_| AppError::InvalidInput("No VC IDs provided".into()))?;
    req.validate().map_err(AppError::InvalidInput)?;
    let ids = req.vc_ids.unwrap_or_default();

    let client = state
        .client
        .as_ref()
        .ok_or_else(|| AppError::Configuration("Service not configured".into()))?;

    // Dispatch all fetches at once and join on the full set. Each fetch has
    // its own error boundary: one failed id must never fail the batch.
    let fetches = ids.iter().map(|vc_id| async move {
        match client.documents().fetch_related(vc_id).await {
            Ok(document) => Some(document),
            Err(err) => {
                tracing::warn!(vc_id = %vc_id, error = %err, "dropping related document from result set");
                None
            }
        }
    });
    let outcomes = join_all(fetches).await;

    let failed = outcomes.iter().filter(|o| o.is_none()).count();
    if failed > 0 {
        tracing::info!(
            requested = ids.len(),
            failed,
            "related-document fan-out completed with partial failures"
        );
    }

    // join_all yields outcomes in dispatch order, so the stable filter below
    // preserves the input ordering of the surviving documents.
    let documents = outcomes.into_iter().flatten().collect();
    Ok(Json(FetchRelatedDocsResponse { documents }))
}
