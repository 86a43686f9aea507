//! Request handlers.
//!
//! # Responsibilities
//! - Drive the report pipeline: validate id → resolve credentials →
//!   fetch → render → respond
//! - Report composite health against the upstream API
//!
//! Every terminal transition emits exactly one diagnostic line with the
//! outcome and student id; full upstream detail stays server-side.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::pdf::render_student_report;

const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

/// Generate and return a PDF report for one student.
pub async fn student_report(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    if student_id.trim().is_empty() {
        tracing::warn!("report requested without a student id");
        return Err(ApiError::MissingStudentId);
    }

    let credentials = state.credentials.resolve(&headers);

    let record = match state.upstream.fetch_student(&credentials, &student_id).await {
        Ok(record) => record,
        Err(err) if err.is_not_found() => {
            tracing::warn!(student_id = %student_id, "student not found upstream");
            return Err(ApiError::StudentNotFound);
        }
        Err(err) => {
            tracing::error!(student_id = %student_id, error = %err, "failed to fetch student record");
            return Err(ApiError::FetchFailed);
        }
    };

    let document = match render_student_report(&record) {
        Ok(document) => document,
        Err(err) => {
            tracing::error!(student_id = %student_id, error = %err, "failed to render student report");
            return Err(ApiError::RenderFailed);
        }
    };

    tracing::info!(
        student_id = %student_id,
        bytes = document.content_length(),
        "student report generated"
    );

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", document.filename()),
        )
        .header(header::CONTENT_LENGTH, document.content_length())
        .body(Body::from(document.into_bytes()))
        .map_err(|_| ApiError::RenderFailed)?;

    Ok(response)
}

/// The empty-id form of the report route, registered as its own path so
/// `GET /api/v1/students//report` answers 400 instead of falling through
/// to the router's 404.
pub async fn student_report_missing_id() -> ApiError {
    tracing::warn!("report requested without a student id");
    ApiError::MissingStudentId
}

/// Composite health: this service plus upstream reachability.
pub async fn health(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let credentials = state.credentials.resolve(&headers);

    match state.upstream.health_check(&credentials).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "service": SERVICE_NAME,
                "nodejs_api": "connected",
            })),
        )
            .into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "upstream health probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "service": SERVICE_NAME,
                    "error": "Node.js API unavailable",
                })),
            )
                .into_response()
        }
    }
}
