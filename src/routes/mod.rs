// ABOUTME: Route module organization for the recipe analyzer HTTP endpoints
// ABOUTME: Groups health and analysis routes with thin handlers over the analysis pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Recipe analysis and ingredient catalog routes
pub mod analysis;
/// Health check route
pub mod health;

pub use analysis::{AnalysisRoutes, AnalyzeRequest, AnalyzeResponse, IngredientsResponse};
pub use health::{HealthResponse, HealthRoutes};
