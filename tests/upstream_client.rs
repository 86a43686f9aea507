//! Error-mapping tests for the upstream client.

use std::time::Duration;

use report_service::auth::Credentials;
use report_service::upstream::{StudentApiClient, UpstreamError};

mod common;
use common::{start_mock_upstream, student_json};

fn client(addr: std::net::SocketAddr) -> StudentApiClient {
    StudentApiClient::new(&format!("http://{}", addr), Duration::from_secs(5))
        .expect("client should build")
}

#[tokio::test]
async fn test_fetch_student_parses_record() {
    let upstream = start_mock_upstream(|_| async move { (200, student_json(2)) }).await;

    let record = client(upstream)
        .fetch_student(&Credentials::default(), "2")
        .await
        .unwrap();

    assert_eq!(record.id, 2);
    assert_eq!(record.name, "Jane Doe");
    assert_eq!(record.class, "Grade 10");
}

#[tokio::test]
async fn test_non_200_preserves_status_and_body() {
    let upstream =
        start_mock_upstream(|_| async move { (404, r#"{"error":"Student not found"}"#.into()) })
            .await;

    let err = client(upstream)
        .fetch_student(&Credentials::default(), "999")
        .await
        .unwrap_err();

    match err {
        UpstreamError::Status { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, r#"{"error":"Student not found"}"#);
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let dead = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead_addr = dead.local_addr().unwrap();
    drop(dead);

    let err = client(dead_addr)
        .fetch_student(&Credentials::default(), "2")
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Transport(_)));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let upstream = start_mock_upstream(|_| async move { (200, "<html>oops</html>".into()) }).await;

    let err = client(upstream)
        .fetch_student(&Credentials::default(), "2")
        .await
        .unwrap_err();

    assert!(matches!(err, UpstreamError::Decode(_)));
}

#[tokio::test]
async fn test_credentials_attached_when_present() {
    let upstream = start_mock_upstream(|req| async move {
        let authed = req.header("Cookie") == Some("accessToken=tok")
            && req.header("X-CSRF-Token") == Some("csrf");
        if authed {
            (200, student_json(2))
        } else {
            (401, r#"{"error":"unauthorized"}"#.into())
        }
    })
    .await;

    let creds = Credentials::new("tok", "csrf");
    let record = client(upstream).fetch_student(&creds, "2").await.unwrap();
    assert_eq!(record.id, 2);
}

#[tokio::test]
async fn test_empty_credentials_not_attached() {
    let upstream = start_mock_upstream(|req| async move {
        let has_creds = req.header("Cookie").is_some() || req.header("X-CSRF-Token").is_some();
        if has_creds {
            (500, "credentials should not be attached".into())
        } else {
            (200, student_json(2))
        }
    })
    .await;

    let record = client(upstream)
        .fetch_student(&Credentials::default(), "2")
        .await
        .unwrap();
    assert_eq!(record.id, 2);
}

#[tokio::test]
async fn test_health_check_ok_on_200() {
    let upstream = start_mock_upstream(|req| async move {
        assert_eq!(req.path, "/api/v1/dashboard");
        (200, r#"{"ok":true}"#.into())
    })
    .await;

    client(upstream)
        .health_check(&Credentials::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_health_check_fails_on_error_status() {
    let upstream = start_mock_upstream(|_| async move { (503, "{}".into()) }).await;

    let err = client(upstream)
        .health_check(&Credentials::default())
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(503));
}
