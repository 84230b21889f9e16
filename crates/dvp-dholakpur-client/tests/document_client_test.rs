//! Contract tests for DocumentClient against the Dholakpur VC API.
//!
//! | Method | Path                            | Test       |
//! |--------|---------------------------------|------------|
//! | GET    | `/vc/fetch/related/docs/{vcId}` | `fetch_*`  |

use dvp_dholakpur_client::{DholakpurApiError, DholakpurClient, DholakpurConfig};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> DholakpurClient {
    let config = DholakpurConfig::local_mock(&mock_server.uri(), "test-token").unwrap();
    DholakpurClient::new(config).unwrap()
}

fn credential_envelope(vc_id: &str) -> serde_json::Value {
    serde_json::json!({
        "message": "Credential found",
        "did": vc_id,
        "document": {
            "title": "Certificate of Residence",
            "content": "The bearer resides in Dholakpur.",
            "issuer_did": "did:dholakpur:issuer-registry",
            "vc_proof": {
                "credential_id": vc_id,
                "content_hash": "4fa1c2d9e0b37a51"
            },
            "vc_type": "residence",
            "vc_status": "active",
            "issuance_date": "2025-11-02T00:00:00Z",
            "expiration_date": "2027-11-02T00:00:00Z",
            "proof": {
                "is_verified_issuer": true,
                "content_integrity": true,
                "sentiment": "neutral",
                "notes": "",
                "related_vc_ids": []
            },
            "did_document_url": "https://api.dholakpur.fun/did/issuer-registry"
        }
    })
}

#[tokio::test]
async fn fetch_sends_correct_path_and_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vc/fetch/related/docs/cred-123"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(credential_envelope("cred-123")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let body = client.documents().fetch_related("cred-123").await.unwrap();
    assert_eq!(body, credential_envelope("cred-123"));
}

#[tokio::test]
async fn fetch_surfaces_404_as_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vc/fetch/related/docs/cred-123"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"unknown vc"}"#))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.documents().fetch_related("cred-123").await;
    match result.unwrap_err() {
        DholakpurApiError::ApiError {
            endpoint,
            status,
            body,
        } => {
            assert_eq!(endpoint, "GET /vc/fetch/related/docs/cred-123");
            assert_eq!(status, 404);
            assert!(body.contains("unknown vc"));
        }
        other => panic!("expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_surfaces_transport_failure_as_http_error() {
    // Point at a port nothing listens on.
    let config = DholakpurConfig::local_mock("http://127.0.0.1:1", "test-token").unwrap();
    let client = DholakpurClient::new(config).unwrap();

    let result = client.documents().fetch_related("cred-123").await;
    match result.unwrap_err() {
        DholakpurApiError::Http { endpoint, .. } => {
            assert_eq!(endpoint, "GET /vc/fetch/related/docs/cred-123");
        }
        other => panic!("expected Http, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_surfaces_malformed_body_as_deserialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vc/fetch/related/docs/cred-123"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("<html>definitely not json</html>"),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.documents().fetch_related("cred-123").await;
    assert!(matches!(
        result.unwrap_err(),
        DholakpurApiError::Deserialization { .. }
    ));
}
