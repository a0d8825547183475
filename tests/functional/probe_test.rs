//! Functional tests for the health probe

use placeholder_gateway::{
    probe::{health_check::EXCERPT_CHARS, HealthProbe},
    ProbeFailure,
};
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn probe_for(server: &MockServer, timeout: Duration) -> HealthProbe {
    HealthProbe::new(format!("{}/", server.uri()), timeout).unwrap()
}

#[tokio::test]
async fn test_probe_succeeds_on_200() {
    let gateway = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"message":"ok"}"#))
        .expect(1)
        .mount(&gateway)
        .await;

    let probe = probe_for(&gateway, Duration::from_secs(10));
    let report = assert_ok!(probe.check().await);

    assert_eq!(report.status, 200);
    assert_eq!(report.target, format!("{}/", gateway.uri()));
    assert!(report.elapsed < Duration::from_secs(10));
    assert!(report.checked_at <= chrono::Utc::now());
}

#[tokio::test]
async fn test_probe_fails_on_503() {
    let gateway = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&gateway)
        .await;

    let probe = probe_for(&gateway, Duration::from_secs(10));
    let failure = assert_err!(probe.check().await);

    assert!(failure.to_string().contains("503"));
    match failure {
        ProbeFailure::UnexpectedStatus { status, excerpt } => {
            assert_eq!(status, 503);
            assert_eq!(excerpt, "maintenance");
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_probe_rejects_other_success_codes() {
    let gateway = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&gateway)
        .await;

    let probe = probe_for(&gateway, Duration::from_secs(10));
    let failure = assert_err!(probe.check().await);

    assert_eq!(failure.to_string(), "Health check failed with status code 204");
}

#[tokio::test]
async fn test_probe_truncates_body_excerpt() {
    let gateway = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("x".repeat(1000)))
        .mount(&gateway)
        .await;

    let probe = probe_for(&gateway, Duration::from_secs(10));

    match assert_err!(probe.check().await) {
        ProbeFailure::UnexpectedStatus { excerpt, .. } => assert_eq!(excerpt.len(), EXCERPT_CHARS),
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_probe_fails_on_timeout() {
    let gateway = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&gateway)
        .await;

    let probe = probe_for(&gateway, Duration::from_millis(100));
    let failure = assert_err!(probe.check().await);

    assert!(matches!(failure, ProbeFailure::Connection(ref e) if e.is_timeout()));
    assert!(failure.to_string().starts_with("HTTP connection failed: "));
}

#[tokio::test]
async fn test_probe_fails_on_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let probe = HealthProbe::new(format!("http://127.0.0.1:{}/", port), Duration::from_secs(2)).unwrap();
    let failure = assert_err!(probe.check().await);

    assert!(matches!(failure, ProbeFailure::Connection(_)));
    assert!(failure.to_string().contains(&format!("127.0.0.1:{}", port)));
}
