// ABOUTME: Recipe difficulty scoring from ingredient count, step count, and advanced techniques
// ABOUTME: Produces a weighted score, its contributing factors, and a banded difficulty level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::intelligence::{DifficultyConfig, RecipeIntelligenceConfig};
use crate::text::{matches_in_order, normalize, split_steps, strip_phrases};
use recipe_core::models::DifficultyLevel;
use serde::{Deserialize, Serialize};

/// Difficulty rating for a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyResult {
    /// Banded level
    pub difficulty: DifficultyLevel,
    /// Fixed description for the level
    pub description: String,
    /// Weighted complexity score
    pub score: f64,
    /// One reason per nonzero score term
    pub factors: Vec<String>,
    /// Advanced techniques found in the steps, in order of first appearance
    pub techniques_found: Vec<String>,
    /// Non-blank ingredient lines
    pub ingredient_count: usize,
    /// Detected step segments
    pub step_count: usize,
}

/// Scores recipe complexity
pub struct DifficultyAnalyzer<'a> {
    config: &'a DifficultyConfig,
}

impl DifficultyAnalyzer<'static> {
    /// Create an analyzer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&RecipeIntelligenceConfig::global().difficulty)
    }
}

impl Default for DifficultyAnalyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> DifficultyAnalyzer<'a> {
    /// Create an analyzer with a custom configuration
    #[must_use]
    pub const fn with_config(config: &'a DifficultyConfig) -> Self {
        Self { config }
    }

    /// Rate the difficulty of a recipe
    ///
    /// `score = w_ingredient * ingredients + w_step * steps + w_technique * techniques`
    #[must_use]
    pub fn analyze_difficulty<S: AsRef<str>>(
        &self,
        ingredients: &[S],
        steps_text: &str,
    ) -> DifficultyResult {
        let ingredient_count = ingredients
            .iter()
            .filter(|line| !line.as_ref().trim().is_empty())
            .count();
        let step_count = count_steps(steps_text);
        let techniques_found = self.detect_techniques(steps_text);

        let weights = &self.config.weights;
        let ingredient_points = weights.ingredient * ingredient_count as f64;
        let step_points = weights.step * step_count as f64;
        let technique_points = weights.technique * techniques_found.len() as f64;
        let score = ingredient_points + step_points + technique_points;

        let mut factors = Vec::new();
        if ingredient_count > 0 {
            factors.push(format!(
                "{ingredient_count} {} (+{ingredient_points:.1})",
                plural(ingredient_count, "ingredient", "ingredients")
            ));
        }
        if step_count > 0 {
            factors.push(format!(
                "{step_count} {} (+{step_points:.1})",
                plural(step_count, "step", "steps")
            ));
        }
        if !techniques_found.is_empty() {
            factors.push(format!(
                "{} advanced {}: {} (+{technique_points:.1})",
                techniques_found.len(),
                plural(techniques_found.len(), "technique", "techniques"),
                techniques_found.join(", ")
            ));
        }

        let difficulty = *self.config.levels.classify(score);

        DifficultyResult {
            difficulty,
            description: self.config.descriptions.for_level(difficulty).to_owned(),
            score,
            factors,
            techniques_found,
            ingredient_count,
            step_count,
        }
    }

    /// Technique keywords present in the steps, deduplicated, in order of first appearance
    #[must_use]
    pub fn detect_techniques(&self, steps_text: &str) -> Vec<String> {
        let scanned = strip_phrases(&normalize(steps_text), &self.config.technique_exceptions);
        matches_in_order(&scanned, &self.config.techniques)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Number of step segments in free-text steps
#[must_use]
pub fn count_steps(steps_text: &str) -> usize {
    split_steps(steps_text).len()
}

const fn plural<'s>(count: usize, one: &'s str, many: &'s str) -> &'s str {
    if count == 1 {
        one
    } else {
        many
    }
}
