// ABOUTME: Configuration module for recipe-intelligence crate
// ABOUTME: Re-exports the recipe intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Analyzer configuration (calorie table, difficulty weights, timing, suggestions)
pub mod intelligence;

pub use intelligence::{ConfigError, RecipeIntelligenceConfig};
