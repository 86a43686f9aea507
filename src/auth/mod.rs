//! Credential recovery from inbound requests.
//!
//! # Responsibilities
//! - Extract the bearer credential and anti-forgery token from cookies
//!   and headers, applying a fixed precedence order per token
//! - Select between request-derived and configured fixed credentials
//!
//! # Design Decisions
//! - Extraction is purely mechanical: no format, expiry, or signature
//!   checks. Missing tokens surface later as upstream 401/403.
//! - Each token's channels form an explicit ordered table of extractor
//!   functions; the first non-empty value wins.

pub mod extract;
pub mod provider;

pub use extract::{extract_credentials, Credentials};
pub use provider::CredentialProvider;
