//! # dvp-api — Axum Proxy Routes for the Document Verification Portal
//!
//! Thin gateway in front of the Dholakpur VC API. Each route validates its
//! input, makes authenticated upstream calls through `dvp-dholakpur-client`,
//! and relays the JSON result. The verification semantics live entirely in
//! the upstream service; this layer owns validation, credential injection,
//! error genericization, and the related-document fan-out.
//!
//! ## API Surface
//!
//! | Route                           | Module                         | Behavior                      |
//! |---------------------------------|--------------------------------|-------------------------------|
//! | `POST /api/verify`              | [`routes::verify`]             | Verify document text          |
//! | `POST /api/fetch-related-docs`  | [`routes::related_docs`]       | Parallel document fan-out     |
//! | `POST /api/fetch-credential-details` | [`routes::credential_details`] | Single document lookup  |
//! | `GET /openapi.json`             | [`openapi`]                    | OpenAPI spec                  |
//! | `GET /health/*`                 | (below)                        | Liveness/readiness probes     |

pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) are mounted outside the API router and the
/// CORS layer. The CORS layer is permissive: the browser front end is
/// served from a separate origin and the routes carry no end-user
/// authentication.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::verify::router())
        .merge(routes::related_docs::router())
        .merge(routes::credential_details::router())
        .merge(openapi::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
