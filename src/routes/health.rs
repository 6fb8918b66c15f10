// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports service status, version, and current timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Health check route for monitoring and load balancer health checks

use axum::{routing::get, Json, Router};
use chrono::Utc;
use recipe_core::constants::{messages, status};
use serde::{Deserialize, Serialize};

/// Health check payload
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"success"` while the process is serving
    pub status: String,
    /// Service banner
    pub message: String,
    /// Crate version
    pub version: String,
    /// RFC 3339 time of the check
    pub timestamp: String,
}

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> Router {
        Router::new().route("/api/health", get(Self::handle_health))
    }

    async fn handle_health() -> Json<HealthResponse> {
        Json(HealthResponse {
            status: status::SUCCESS.to_owned(),
            message: messages::HEALTHY.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
