//! Student report service library.
//!
//! A backend-for-frontend that fetches a student record from the upstream
//! student API and renders it into a downloadable PDF report.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http (router + handlers)
//!                        │
//!                        ▼
//!                     auth (credential extraction / provider)
//!                        │
//!                        ▼
//!                     upstream (student API client) ────▶ Upstream API
//!                        │
//!                        ▼
//!                     pdf (fixed-layout report renderer)
//!                        │
//!     Client Response ◀──┘ (application/pdf attachment)
//! ```

pub mod auth;
pub mod config;
pub mod http;
pub mod model;
pub mod pdf;
pub mod upstream;

pub use config::ServiceConfig;
pub use http::HttpServer;
