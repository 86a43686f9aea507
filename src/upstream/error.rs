//! Error taxonomy for upstream calls.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while reaching or reading the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never produced an HTTP response (DNS, connect,
    /// timeout, broken transfer).
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream answered with a non-200 status. The raw body is
    /// preserved verbatim for server-side diagnostics.
    #[error("upstream returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// A 200 response whose body does not decode into the expected shape.
    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

impl UpstreamError {
    /// The HTTP status the upstream answered with, if it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the upstream reported the requested entity as absent.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = UpstreamError::Status {
            status: StatusCode::NOT_FOUND,
            body: r#"{"error":"Student not found"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.is_not_found());

        let err = UpstreamError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: String::new(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_status_display_preserves_body() {
        let err = UpstreamError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: r#"{"error":"boom"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains(r#"{"error":"boom"}"#));
    }
}
