// ABOUTME: Main library entry point for the recipe analyzer HTTP service
// ABOUTME: Wires configuration, logging, middleware, and routes around the recipe intelligence engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Recipe Analyzer
//!
//! HTTP front end for the recipe intelligence engine. A client posts a recipe
//! (name, ingredient lines, free-text steps) and receives calorie, difficulty,
//! cooking time, and suggestion analysis as one JSON document.
//!
//! ## Endpoints
//!
//! - `GET /api/health`: liveness and version
//! - `POST /api/analyze`: full recipe analysis
//! - `GET /api/ingredients`: ingredient names known to the calorie table
//!
//! The analyzers live in the `recipe-intelligence` crate; shared models and the
//! error type live in `recipe-core`.

/// Server and analyzer configuration
pub mod config;

/// Tracing subscriber setup and structured log helpers
pub mod logging;

/// CORS and request id helpers
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

pub use recipe_core::{AppError, AppResult, ErrorCode};
pub use recipe_intelligence::{RecipeAnalyzer, RecipeIntelligenceConfig};
pub use server::{build_router, serve, AppState};
