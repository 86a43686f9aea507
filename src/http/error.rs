//! Client-facing error responses.
//!
//! Maps the internal error taxonomy to an HTTP status and a
//! `{"error": "<message>"}` JSON body. Upstream diagnostic detail never
//! reaches the caller; it is logged at the handler before the mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Terminal outcomes of the report pipeline, as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Student ID is required")]
    MissingStudentId,

    #[error("Student not found")]
    StudentNotFound,

    #[error("Failed to fetch student data")]
    FetchFailed,

    #[error("Failed to generate PDF report")]
    RenderFailed,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingStudentId => StatusCode::BAD_REQUEST,
            ApiError::StudentNotFound => StatusCode::NOT_FOUND,
            ApiError::FetchFailed | ApiError::RenderFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
