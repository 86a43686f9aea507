//! HTTP client for the upstream student API.
//!
//! # Responsibilities
//! - Build authenticated requests (cookie token + CSRF header)
//! - Enforce the fixed per-call timeout
//! - Map outcomes into `UpstreamError`
//!
//! # Design Decisions
//! - Credentials are threaded by value into every call rather than stored
//!   on the client, so concurrent requests can never observe each other's
//!   tokens.
//! - Responses are read as text first; the raw body survives verbatim in
//!   `Status` errors and the decode step stays distinguishable from
//!   transport failures.

use std::time::Duration;

use reqwest::{header, StatusCode};

use crate::auth::Credentials;
use crate::model::StudentRecord;
use crate::upstream::error::{UpstreamError, UpstreamResult};

const STUDENTS_PATH: &str = "/api/v1/students";
const DASHBOARD_PATH: &str = "/api/v1/dashboard";

/// Client for the upstream student API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct StudentApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl StudentApiClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Fetch a single student by id.
    pub async fn fetch_student(
        &self,
        credentials: &Credentials,
        student_id: &str,
    ) -> UpstreamResult<StudentRecord> {
        let url = format!("{}{}/{}", self.base_url, STUDENTS_PATH, student_id);
        let response = self
            .request(&url, credentials)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(UpstreamError::Transport)?;

        if status != StatusCode::OK {
            return Err(UpstreamError::Status { status, body });
        }

        serde_json::from_str(&body).map_err(UpstreamError::Decode)
    }

    /// Probe the upstream dashboard endpoint.
    ///
    /// A 200 means the upstream is reachable and accepts the credentials;
    /// anything else fails with the same taxonomy as `fetch_student`.
    pub async fn health_check(&self, credentials: &Credentials) -> UpstreamResult<()> {
        let url = format!("{}{}", self.base_url, DASHBOARD_PATH);
        let response = self
            .request(&url, credentials)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        Ok(())
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, url: &str, credentials: &Credentials) -> reqwest::RequestBuilder {
        let mut builder = self
            .http
            .get(url)
            .header(header::CONTENT_TYPE, "application/json");

        if !credentials.access_token.is_empty() {
            builder = builder.header(
                header::COOKIE,
                format!("accessToken={}", credentials.access_token),
            );
        }
        if !credentials.csrf_token.is_empty() {
            builder = builder.header("X-CSRF-Token", &credentials.csrf_token);
        }

        builder
    }
}
