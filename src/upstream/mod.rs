//! Upstream student API client.
//!
//! # Responsibilities
//! - Issue authenticated reads against the upstream student service
//! - Map transport/HTTP outcomes into the `UpstreamError` taxonomy
//! - Probe upstream reachability for the health endpoint

pub mod client;
pub mod error;

pub use client::StudentApiClient;
pub use error::UpstreamError;
