//! Token extraction from request cookies and headers.

use std::fmt;

use axum::http::{header, HeaderMap};

/// Credentials forwarded to the upstream API on behalf of one request.
///
/// Both tokens are opaque strings and either may be empty. They live for
/// a single request pipeline and are never persisted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
    pub csrf_token: String,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            csrf_token: csrf_token.into(),
        }
    }
}

// Token contents must never reach the logs in full.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &redact(&self.access_token))
            .field("csrf_token", &redact(&self.csrf_token))
            .finish()
    }
}

fn redact(token: &str) -> String {
    if token.is_empty() {
        "<empty>".to_string()
    } else {
        format!("<{} bytes>", token.len())
    }
}

type TokenSource = fn(&HeaderMap) -> Option<String>;

/// Channels for the access token, highest precedence first.
const ACCESS_TOKEN_SOURCES: &[TokenSource] = &[
    access_token_cookie,
    authorization_bearer,
    x_access_token_header,
];

/// Channels for the CSRF token, highest precedence first.
const CSRF_TOKEN_SOURCES: &[TokenSource] = &[csrf_token_cookie, x_csrf_token_header];

/// Recover `(access_token, csrf_token)` from an inbound request's headers.
///
/// Pure function of the header map; each token falls back through its
/// channel table independently and ends up empty when no channel yields a
/// value.
pub fn extract_credentials(headers: &HeaderMap) -> Credentials {
    Credentials {
        access_token: first_token(headers, ACCESS_TOKEN_SOURCES),
        csrf_token: first_token(headers, CSRF_TOKEN_SOURCES),
    }
}

fn first_token(headers: &HeaderMap, sources: &[TokenSource]) -> String {
    sources
        .iter()
        .find_map(|source| source(headers).filter(|token| !token.is_empty()))
        .unwrap_or_default()
}

fn access_token_cookie(headers: &HeaderMap) -> Option<String> {
    cookie_value(headers, "accessToken")
}

fn csrf_token_cookie(headers: &HeaderMap) -> Option<String> {
    cookie_value(headers, "csrfToken")
}

fn authorization_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    value
        .strip_prefix("Bearer ")
        .map(|token| token.to_string())
}

fn x_access_token_header(headers: &HeaderMap) -> Option<String> {
    header_value(headers, "X-Access-Token")
}

fn x_csrf_token_header(headers: &HeaderMap) -> Option<String> {
    header_value(headers, "X-CSRF-Token")
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

/// Look up a named cookie across all `Cookie` headers.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    for header in headers.get_all(header::COOKIE) {
        let Ok(value) = header.to_str() else { continue };
        for pair in value.split(';') {
            let pair = pair.trim();
            if let Some((key, cookie)) = pair.split_once('=') {
                if key == name {
                    return Some(cookie.to_string());
                }
            }
        }
    }
    None
}
