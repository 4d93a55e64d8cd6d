use api::{ClientConfig, HttpVerificationService, VerificationService, VerifyError};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(mock_server: &MockServer) -> HttpVerificationService {
    let config = ClientConfig::default().with_base_url(mock_server.uri());
    HttpVerificationService::new(config).expect("client should build")
}

#[tokio::test]
async fn test_verify_email_success_returns_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/verify-email/abc123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "message": "Email verified" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let verified = service_for(&mock_server)
        .verify_email("abc123")
        .await
        .expect("verification should succeed");

    assert_eq!(verified.message.as_deref(), Some("Email verified"));
}

#[tokio::test]
async fn test_verify_email_success_without_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/verify-email/abc123"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let verified = service_for(&mock_server)
        .verify_email("abc123")
        .await
        .expect("verification should succeed");

    assert_eq!(verified.message, None);
}

#[tokio::test]
async fn test_verify_email_rejection_carries_error_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/verify-email/stale"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "error": "Token expired" })),
        )
        .mount(&mock_server)
        .await;

    let err = service_for(&mock_server)
        .verify_email("stale")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        VerifyError::Rejected {
            status: 400,
            error: Some("Token expired".to_string()),
        }
    );
}

#[tokio::test]
async fn test_verify_email_rejection_with_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/verify-email/stale"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let err = service_for(&mock_server)
        .verify_email("stale")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        VerifyError::Rejected {
            status: 400,
            error: None,
        }
    );
}

#[tokio::test]
async fn test_verify_email_malformed_success_body_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/verify-email/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy page</html>"))
        .mount(&mock_server)
        .await;

    let err = service_for(&mock_server)
        .verify_email("abc123")
        .await
        .unwrap_err();

    assert!(matches!(err, VerifyError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_verify_email_encodes_token_path_segment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/verify-email/a%2Fb"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "message": "ok" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let verified = service_for(&mock_server).verify_email("a/b").await;
    assert!(verified.is_ok(), "encoded token should hit the mock: {verified:?}");
}

#[tokio::test]
async fn test_verify_email_connection_refused_is_transport_error() {
    // Nothing listens on port 1.
    let config = ClientConfig::default()
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(Duration::from_secs(5));
    let service = HttpVerificationService::new(config).expect("client should build");

    let err = service.verify_email("abc123").await.unwrap_err();

    assert!(matches!(err, VerifyError::Transport(_)), "got {err:?}");
}
