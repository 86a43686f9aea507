//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and referential requirements
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::{AuthMode, ServiceConfig};

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    BindAddress(String),

    #[error("upstream.base_url '{0}' is not a valid http(s) URL")]
    UpstreamUrl(String),

    #[error("upstream.timeout_secs must be greater than zero")]
    UpstreamTimeout,

    #[error("timeouts.request_secs must be greater than zero")]
    RequestTimeout,

    #[error("auth.access_token must be set when auth.mode is 'fixed'")]
    MissingFixedAccessToken,

    #[error("auth.csrf_token must be set when auth.mode is 'fixed'")]
    MissingFixedCsrfToken,
}

/// Check a deserialized configuration for semantic problems.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::UpstreamUrl(
            config.upstream.base_url.clone(),
        )),
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::UpstreamTimeout);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    if config.auth.mode == AuthMode::Fixed {
        if config.auth.access_token.is_empty() {
            errors.push(ValidationError::MissingFixedAccessToken);
        }
        if config.auth.csrf_token.is_empty() {
            errors.push(ValidationError::MissingFixedCsrfToken);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
