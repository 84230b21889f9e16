//! Contract tests for VerifyClient against the Dholakpur VC API.
//!
//! These tests use wiremock to simulate the live Dholakpur API at
//! `api.dholakpur.fun`.
//!
//! | Method | Path         | Test                |
//! |--------|--------------|---------------------|
//! | POST   | `/vc/verify` | `verify_*`          |

use dvp_dholakpur_client::verify::VerifyDocumentRequest;
use dvp_dholakpur_client::{DholakpurClient, DholakpurConfig};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a DholakpurClient pointed at a wiremock server.
fn test_client(mock_server: &MockServer) -> DholakpurClient {
    let config = DholakpurConfig::local_mock(&mock_server.uri(), "test-token").unwrap();
    DholakpurClient::new(config).unwrap()
}

fn proof_body() -> serde_json::Value {
    serde_json::json!({
        "message": "Verification complete",
        "title": "Geo Fact",
        "content": "Paris is the capital of France.",
        "proof": {
            "is_verified_issuer": true,
            "content_integrity": true,
            "sentiment": "neutral",
            "notes": "Matches official records.",
            "related_vc_ids": ["vc-001", "vc-002"],
            "checked_at": "2026-02-01T09:30:00Z",
            "semantic_similarity": 0.93
        }
    })
}

#[tokio::test]
async fn verify_sends_bearer_token_and_exact_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/vc/verify"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_json(serde_json::json!({
            "content": "Paris is the capital of France.",
            "title": "Geo Fact"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(proof_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = VerifyDocumentRequest {
        content: "Paris is the capital of France.".into(),
        title: Some("Geo Fact".into()),
    };

    let body = client.verify().verify(&req).await.unwrap();
    assert_eq!(body, proof_body());
}

#[tokio::test]
async fn verify_omits_title_key_when_absent() {
    let mock_server = MockServer::start().await;

    // Matches only a body with no `title` key at all.
    Mock::given(method("POST"))
        .and(path("/vc/verify"))
        .and(body_json(serde_json::json!({
            "content": "Paris is the capital of France."
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(proof_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = VerifyDocumentRequest {
        content: "Paris is the capital of France.".into(),
        title: None,
    };

    client.verify().verify(&req).await.unwrap();
}

#[tokio::test]
async fn verify_returns_upstream_body_unchanged() {
    let mock_server = MockServer::start().await;

    // Include a field this client has no model for — it must survive relay.
    let body = serde_json::json!({
        "proof": { "is_verified_issuer": false },
        "unmodeled_field": [1, 2, 3]
    });
    Mock::given(method("POST"))
        .and(path("/vc/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = VerifyDocumentRequest {
        content: "A perfectly ordinary document.".into(),
        title: None,
    };

    let got = client.verify().verify(&req).await.unwrap();
    assert_eq!(got, body);
}

#[tokio::test]
async fn verify_surfaces_non_success_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/vc/verify"))
        .respond_with(
            ResponseTemplate::new(503).set_body_string(r#"{"error":"maintenance window"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = VerifyDocumentRequest {
        content: "A perfectly ordinary document.".into(),
        title: None,
    };

    let result = client.verify().verify(&req).await;
    match result.unwrap_err() {
        dvp_dholakpur_client::DholakpurApiError::ApiError { status, body, .. } => {
            assert_eq!(status, 503);
            assert!(body.contains("maintenance window"));
        }
        other => panic!("expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn verify_surfaces_malformed_response_as_deserialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/vc/verify"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("not json at all"),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = VerifyDocumentRequest {
        content: "A perfectly ordinary document.".into(),
        title: None,
    };

    let result = client.verify().verify(&req).await;
    match result.unwrap_err() {
        dvp_dholakpur_client::DholakpurApiError::Deserialization { endpoint, .. } => {
            assert_eq!(endpoint, "POST /vc/verify");
        }
        other => panic!("expected Deserialization, got: {other:?}"),
    }
}
