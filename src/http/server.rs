//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (timeout, request ID, tracing)
//! - Bind the server to a listener and serve with graceful shutdown

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::auth::CredentialProvider;
use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::upstream::StudentApiClient;

/// Application state injected into handlers.
///
/// The upstream client is immutable and shared; credentials are resolved
/// per request through the provider, so concurrent requests cannot
/// observe each other's tokens.
#[derive(Clone)]
pub struct AppState {
    pub upstream: StudentApiClient,
    pub credentials: CredentialProvider,
}

/// HTTP server for the report service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, reqwest::Error> {
        let upstream = StudentApiClient::new(
            &config.upstream.base_url,
            Duration::from_secs(config.upstream.timeout_secs),
        )?;
        let credentials = CredentialProvider::from_config(&config.auth);

        let state = AppState {
            upstream,
            credentials,
        };
        let router = Self::build_router(&config, state);

        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/api/v1/students/{id}/report",
                get(handlers::student_report),
            )
            // `{id}` never matches an empty segment; the literal route
            // keeps the 400 contract for `/api/v1/students//report`.
            .route(
                "/api/v1/students//report",
                get(handlers::student_report_missing_id),
            )
            .route("/health", get(handlers::health))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
