//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{AuthMode, ServiceConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("configuration validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Load and validate the service configuration.
///
/// Without a path the defaults are used. Environment variables override
/// the file in either case: `PORT` (listener port), `NODEJS_API_URL`
/// (upstream base URL), and `AUTH_MODE=test` (fixed-credential mode, with
/// tokens taken from the `[auth]` section).
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => ServiceConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut ServiceConfig) {
    if let Ok(port) = env::var("PORT") {
        if !port.is_empty() {
            config.listener.bind_address = format!("0.0.0.0:{port}");
        }
    }
    if let Ok(url) = env::var("NODEJS_API_URL") {
        if !url.is_empty() {
            config.upstream.base_url = url;
        }
    }
    if env::var("AUTH_MODE").as_deref() == Ok("test") {
        config.auth.mode = AuthMode::Fixed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/report-service.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_errors_joined_in_display() {
        let err = ConfigError::Validation(vec![
            ValidationError::UpstreamTimeout,
            ValidationError::RequestTimeout,
        ]);
        let msg = err.to_string();
        assert!(msg.contains("upstream.timeout_secs"));
        assert!(msg.contains("; "));
    }
}
