// ABOUTME: HTTP server assembly for the recipe analyzer: shared state, router, and middleware stack
// ABOUTME: Binds the listener and serves until Ctrl+C or SIGTERM triggers a graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! HTTP server lifecycle
//!
//! Layer order, outermost first: request id assignment, tracing, request id
//! propagation, CORS, timeout, body limit. The body limit is enforced by the
//! JSON extractor, so an oversized body still gets the JSON error envelope.

use crate::config::ServerConfig;
use crate::middleware::setup_cors;
use crate::routes::{AnalysisRoutes, HealthRoutes};
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::Uri;
use axum::Router;
use recipe_core::AppError;
use recipe_intelligence::RecipeIntelligenceConfig;
#[cfg(not(unix))]
use std::future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// State shared by every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// Analyzer tables and thresholds, read-only after startup
    pub intelligence: Arc<RecipeIntelligenceConfig>,
}

impl AppState {
    /// Wrap a loaded intelligence configuration
    #[must_use]
    pub fn new(intelligence: RecipeIntelligenceConfig) -> Self {
        Self {
            intelligence: Arc::new(intelligence),
        }
    }
}

/// Build the application router with all routes and middleware
#[must_use]
pub fn build_router(config: &ServerConfig, state: Arc<AppState>) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(setup_cors(config))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(DefaultBodyLimit::max(config.max_request_body_bytes));

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AnalysisRoutes::routes(state))
        .fallback(handle_not_found)
        .layer(middleware)
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn serve(config: &ServerConfig, state: Arc<AppState>) -> Result<()> {
    let app = build_router(config, state);
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("HTTP server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C"),
        () = terminate => info!("Received SIGTERM"),
    }

    info!("Starting graceful shutdown");
}
