// ABOUTME: Recipe analyzer HTTP server binary
// ABOUTME: Initializes logging, loads configuration, and serves the analysis API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recipe Analyzer Server
//!
//! Configuration comes from the environment, optionally overridden by
//! command line flags. Analyzer tables load from `RECIPE_INTELLIGENCE_CONFIG`
//! when set, otherwise the built-in defaults are used.

use anyhow::Result;
use clap::Parser;
use recipe_analyzer::config::{RecipeIntelligenceConfig, ServerConfig};
use recipe_analyzer::logging;
use recipe_analyzer::server::{self, AppState};
use recipe_core::constants::service_names;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "recipe-analyzer-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Cooking Recipe Analyzer HTTP API")]
struct Args {
    /// Override the bind address
    #[arg(long)]
    host: Option<String>,

    /// Override the HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.http_host = host;
    }
    if let Some(port) = args.http_port {
        config.http_port = port;
    }

    let intelligence = RecipeIntelligenceConfig::load()?;
    info!(
        "{} starting with {} calorie entries",
        service_names::PRODUCT_NAME,
        intelligence.calories.database.len()
    );
    info!("Server configuration: {}", config.summary());
    info!("Available endpoints:");
    info!("  GET  /api/health      - Service health");
    info!("  POST /api/analyze     - Analyze a recipe");
    info!("  GET  /api/ingredients - Known ingredient names");

    server::serve(&config, Arc::new(AppState::new(intelligence))).await
}
