// ABOUTME: Configuration management module for the recipe analyzer service
// ABOUTME: Exposes server environment config; analyzer tuning lives in recipe-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration module for the recipe analyzer service
//!
//! - **Environment**: HTTP server configuration from environment variables
//! - **Intelligence**: analyzer tables and thresholds, re-exported from `recipe-intelligence`

/// Environment and server configuration
pub mod environment;

pub use environment::ServerConfig;
pub use recipe_intelligence::config::{ConfigError, RecipeIntelligenceConfig};
