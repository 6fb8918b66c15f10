// ABOUTME: Recipe intelligence configuration for calorie, difficulty, timing, and suggestion analysis
// ABOUTME: Orchestrates section configs and provides unified loading, overrides, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recipe Intelligence Configuration Module
//!
//! Every threshold, weight, and vocabulary table used by the analyzers lives
//! here, so the heuristics can be tuned without code changes.
//!
//! # Module Structure
//!
//! - `calories` - Ingredient calorie table, fallback estimate, servings bands
//! - `difficulty` - Score weights, level bands, technique vocabulary
//! - `timing` - Per-step time, preparation floor, method durations, categories
//! - `suggestions` - Diet/meal rules, substitutions, spices, serving and quick tips
//!
//! # Loading
//!
//! Defaults, then an optional JSON document named by `RECIPE_INTELLIGENCE_CONFIG`,
//! then scalar environment overrides, then validation.

pub mod calories;
pub mod difficulty;
pub mod error;
pub mod suggestions;
pub mod timing;

pub use calories::{CalorieConfig, CalorieEntry};
pub use difficulty::{DifficultyConfig, DifficultyDescriptions, DifficultyWeights};
pub use error::ConfigError;
pub use suggestions::{
    CalorieTips, DietRule, MarkerSet, MealRule, Pairing, QuickTips, SuggestionConfig,
};
pub use timing::{CookingMethod, TimeDescriptions, TimingConfig};

use crate::text::{normalize, Keyword};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Environment variable naming a JSON configuration document
pub const CONFIG_PATH_ENV: &str = "RECIPE_INTELLIGENCE_CONFIG";

/// Global configuration singleton
static RECIPE_INTELLIGENCE_CONFIG: OnceLock<RecipeIntelligenceConfig> = OnceLock::new();

/// Main recipe intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeIntelligenceConfig {
    /// Configuration for calorie estimation
    pub calories: CalorieConfig,
    /// Configuration for difficulty scoring
    pub difficulty: DifficultyConfig,
    /// Configuration for cooking time prediction
    pub timing: TimingConfig,
    /// Configuration for suggestion generation
    pub suggestions: SuggestionConfig,
}

impl RecipeIntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        RECIPE_INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load recipe intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the optional config file and environment
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, an
    /// environment variable holds an invalid value, or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(env::VarError::NotPresent) => Self::default(),
            Err(e) => return Err(e.into()),
        };

        let config = config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Read a JSON configuration document; omitted sections keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid document
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        info!(path = %path.display(), "Loaded recipe intelligence config file");
        Ok(config)
    }

    /// Parse a JSON configuration document; omitted sections keep their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the document is malformed
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.calories.validate()?;
        self.difficulty.validate()?;
        self.timing.validate()?;
        self.suggestions.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("RECIPE_DEFAULT_CALORIES", &mut self.calories.default_calories)?;

        Self::apply_env_var("RECIPE_INGREDIENT_WEIGHT", &mut self.difficulty.weights.ingredient)?;
        Self::apply_env_var("RECIPE_STEP_WEIGHT", &mut self.difficulty.weights.step)?;
        Self::apply_env_var("RECIPE_TECHNIQUE_WEIGHT", &mut self.difficulty.weights.technique)?;

        Self::apply_env_var("RECIPE_MINUTES_PER_STEP", &mut self.timing.minutes_per_step)?;
        Self::apply_env_var("RECIPE_BASE_PREP_MINUTES", &mut self.timing.base_prep_minutes)?;

        Ok(self)
    }
}

/// Reject empty keywords and keywords that normalize to the same text
pub(crate) fn ensure_unique_keywords<T: Keyword>(
    table: &'static str,
    entries: &[T],
) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        let key = normalize(entry.keyword());
        if key.is_empty() || !seen.insert(key) {
            return Err(ConfigError::DuplicateKey {
                table,
                key: entry.keyword().to_owned(),
            });
        }
    }
    Ok(())
}
