//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the gateway surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "DVP Gateway API",
        version = "0.1.0",
        description = "Proxy routes for the Dholakpur Document Verification Portal: document verification, related-document fan-out, and credential detail retrieval.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::verify::verify_document,
        crate::routes::related_docs::fetch_related_docs,
        crate::routes::credential_details::fetch_credential_details,
    ),
    components(schemas(
        crate::routes::verify::VerifyRequest,
        crate::routes::related_docs::FetchRelatedDocsRequest,
        crate::routes::credential_details::FetchCredentialDetailsRequest,
    )),
    tags(
        (name = "verify", description = "Document verification proxy"),
        (name = "documents", description = "Credential document retrieval"),
    )
)]
struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_spec))
}

/// GET /openapi.json — the assembled spec.
async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
