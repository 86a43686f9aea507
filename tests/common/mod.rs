//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use report_service::{HttpServer, ServiceConfig};

/// What the mock upstream saw for one request.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl ReceivedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Start a programmable mock upstream on an ephemeral port.
///
/// The closure receives the parsed request and decides `(status, body)`;
/// bodies are served as `application/json`.
pub async fn start_mock_upstream<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(ReceivedRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let Some(request) = read_request(&mut socket).await else {
                            return;
                        };
                        let (status, body) = f(request).await;
                        let status_text = match status {
                            200 => "200 OK",
                            401 => "401 Unauthorized",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Read one GET request off the socket and parse its line and headers.
async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<ReceivedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.len() > 64 * 1024 {
            return None;
        }
    }

    let text = String::from_utf8_lossy(&buf);
    let mut lines = text.split("\r\n");
    let request_line = lines.next()?;
    let path = request_line.split_whitespace().nth(1)?.to_string();

    let mut headers = Vec::new();
    for line in lines {
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    Some(ReceivedRequest { path, headers })
}

/// Boot the service against the given upstream, on an ephemeral port.
pub async fn start_service(upstream_addr: SocketAddr) -> SocketAddr {
    let mut config = ServiceConfig::default();
    config.upstream.base_url = format!("http://{}", upstream_addr);
    start_service_with_config(config).await
}

/// Boot the service with a fully prepared configuration.
pub async fn start_service_with_config(config: ServiceConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config).expect("server should build");

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Test HTTP client that ignores any environment proxy configuration.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// A populated student record as the upstream would serialize it.
pub fn student_json(id: i64) -> String {
    serde_json::json!({
        "id": id,
        "name": "Jane Doe",
        "email": "jane@example.com",
        "systemAccess": true,
        "phone": "555-1234",
        "gender": "Female",
        "dob": "2005-01-15T00:00:00.000Z",
        "class": "Grade 10",
        "section": "A",
        "roll": 7,
        "fatherName": "John Doe",
        "fatherPhone": "555-5678",
        "motherName": "Mary Doe",
        "motherPhone": "555-9012",
        "guardianName": "John Doe",
        "guardianPhone": "555-5678",
        "relationOfGuardian": "Father",
        "currentAddress": "123 Main Street, Springfield",
        "permanentAddress": "456 Oak Avenue, Shelbyville",
        "admissionDate": "2023-09-01T00:00:00.000Z",
        "reporterName": "Ms. Smith"
    })
    .to_string()
}

/// Strip the student id out of a mock-upstream request path, if it is a
/// student fetch.
pub fn student_id_from_path(path: &str) -> Option<&str> {
    path.strip_prefix("/api/v1/students/")
}
