//! Credential source selection.

use axum::http::HeaderMap;

use crate::auth::extract::{extract_credentials, Credentials};
use crate::config::schema::{AuthConfig, AuthMode};

/// Where each request's upstream credentials come from.
///
/// Selected once at startup from configuration; handlers resolve through
/// it without knowing which mode is active.
#[derive(Debug, Clone)]
pub enum CredentialProvider {
    /// Extract tokens from the inbound request's cookies and headers.
    FromRequest,
    /// Use a fixed credential pair regardless of the request (designated
    /// test mode).
    Fixed(Credentials),
}

impl CredentialProvider {
    pub fn from_config(auth: &AuthConfig) -> Self {
        match auth.mode {
            AuthMode::Request => CredentialProvider::FromRequest,
            AuthMode::Fixed => CredentialProvider::Fixed(Credentials::new(
                auth.access_token.clone(),
                auth.csrf_token.clone(),
            )),
        }
    }

    /// Resolve the credentials to attach to this request's upstream calls.
    pub fn resolve(&self, headers: &HeaderMap) -> Credentials {
        match self {
            CredentialProvider::FromRequest => extract_credentials(headers),
            CredentialProvider::Fixed(credentials) => credentials.clone(),
        }
    }
}
