// ABOUTME: Recipe intelligence engine: calorie, difficulty, time, and suggestion analysis
// ABOUTME: Pure keyword and heuristic analyzers over free-text recipes with tunable configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Recipe Intelligence
//!
//! Turns a free-text recipe into a structured analysis. Every analyzer is a
//! pure function over its input and a read-only configuration, so they are
//! safe to call from any number of threads without locking.
//!
//! ## Modules
//!
//! - **calorie_estimator**: Ingredient calorie lookup and servings estimate
//! - **difficulty_analyzer**: Weighted complexity score and difficulty level
//! - **time_predictor**: Cooking time from steps and detected methods
//! - **suggestion_generator**: Diet, meal, substitution, spice, and serving advice
//! - **pipeline**: `RecipeAnalyzer` composing the four analyzers
//! - **config**: `RecipeIntelligenceConfig`, the tunable tables and thresholds

/// Threshold banding of continuous values into labels
pub mod banding;

/// Calorie estimation from ingredient lines
pub mod calorie_estimator;

/// Analyzer configuration and loading
pub mod config;

/// Difficulty scoring
pub mod difficulty_analyzer;

/// Full recipe analysis pipeline
pub mod pipeline;

/// Diet, meal, and advisory suggestions
pub mod suggestion_generator;

/// Text normalization and keyword matching
pub mod text;

/// Cooking time prediction
pub mod time_predictor;

pub use banding::{Band, Banding};
pub use calorie_estimator::{CalorieEstimator, CalorieResult};
pub use config::{ConfigError, RecipeIntelligenceConfig};
pub use difficulty_analyzer::{DifficultyAnalyzer, DifficultyResult};
pub use pipeline::RecipeAnalyzer;
pub use suggestion_generator::{SuggestionGenerator, SuggestionResult};
pub use time_predictor::{TimePredictor, TimeResult};
