// ABOUTME: Calorie estimation from free-text ingredient lines using the calorie keyword table
// ABOUTME: Resolves each line to its most specific table entry and estimates servings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Calorie estimation.
//!
//! Each ingredient line is normalized, stripped of quantities and units, and
//! matched against the calorie table. The longest matching keyword wins, so
//! "chicken broth" resolves to the broth entry and not to "chicken". Lines
//! with no match contribute the configured fallback instead of being dropped.

use crate::config::intelligence::{CalorieConfig, RecipeIntelligenceConfig};
use crate::text::{longest_match, strip_quantities};
use recipe_core::models::CalorieBreakdownEntry;
use serde::{Deserialize, Serialize};

/// Calorie estimate for a list of ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieResult {
    /// Sum of every breakdown entry (kcal)
    pub total_calories: u32,
    /// Servings estimated from the ingredient count, at least 1
    pub servings_estimate: u32,
    /// Contribution of each non-blank line, in input order
    pub breakdown: Vec<CalorieBreakdownEntry>,
    /// Input lines that matched a table entry
    pub matched: Vec<String>,
}

/// Estimates recipe calories from ingredient lines
pub struct CalorieEstimator<'a> {
    config: &'a CalorieConfig,
}

impl CalorieEstimator<'static> {
    /// Create an estimator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&RecipeIntelligenceConfig::global().calories)
    }
}

impl Default for CalorieEstimator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CalorieEstimator<'a> {
    /// Create an estimator with a custom configuration
    #[must_use]
    pub const fn with_config(config: &'a CalorieConfig) -> Self {
        Self { config }
    }

    /// Estimate total calories and servings for an ingredient list
    ///
    /// Blank lines are ignored. An empty list yields zero calories and the
    /// smallest servings estimate.
    #[must_use]
    pub fn estimate_calories<S: AsRef<str>>(&self, ingredients: &[S]) -> CalorieResult {
        let breakdown: Vec<CalorieBreakdownEntry> = ingredients
            .iter()
            .map(|line| line.as_ref().trim())
            .filter(|line| !line.is_empty())
            .map(|line| self.estimate_ingredient(line))
            .collect();

        let total_calories = breakdown
            .iter()
            .fold(0_u32, |total, entry| total.saturating_add(entry.calories));

        let matched = breakdown
            .iter()
            .filter(|entry| entry.matched.is_some())
            .map(|entry| entry.ingredient.clone())
            .collect();

        CalorieResult {
            total_calories,
            servings_estimate: self.servings_for(breakdown.len()),
            breakdown,
            matched,
        }
    }

    /// Resolve a single ingredient line to its calorie contribution
    #[must_use]
    pub fn estimate_ingredient(&self, ingredient: &str) -> CalorieBreakdownEntry {
        let cleaned = strip_quantities(ingredient);
        let entry = longest_match(&cleaned, &self.config.database);

        CalorieBreakdownEntry {
            ingredient: ingredient.to_owned(),
            calories: entry.map_or(self.config.default_calories, |e| e.calories),
            matched: entry.map(|e| e.keyword.clone()),
        }
    }

    /// Servings estimate for an ingredient count, never below 1
    #[must_use]
    pub fn servings_for(&self, ingredient_count: usize) -> u32 {
        (*self.config.servings.classify(ingredient_count as f64)).max(1)
    }

    /// Every calorie table key, sorted ascending
    #[must_use]
    pub fn known_ingredients(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .config
            .database
            .iter()
            .map(|entry| entry.keyword.clone())
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

/// `total / servings` rounded half to even, treating zero servings as one
#[must_use]
pub fn per_serving(total_calories: u32, servings: u32) -> u32 {
    (f64::from(total_calories) / f64::from(servings.max(1))).round_ties_even() as u32
}
