// ABOUTME: Recipe analysis pipeline composing the four analyzers into one nested result
// ABOUTME: Runs calorie and difficulty analysis in parallel, then time, then suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::calorie_estimator::{per_serving, CalorieEstimator, CalorieResult};
use crate::config::intelligence::RecipeIntelligenceConfig;
use crate::difficulty_analyzer::{DifficultyAnalyzer, DifficultyResult};
use crate::suggestion_generator::{SuggestionGenerator, SuggestionResult};
use crate::time_predictor::{TimePredictor, TimeResult};
use recipe_core::models::{
    CalorieSummary, DifficultySummary, IngredientCatalog, RecipeAnalysis, RecipeInput,
    RecipeStats, SuggestionSummary, TimeSummary,
};
use std::time::Instant;
use tracing::debug;

/// Runs every analyzer over a recipe
pub struct RecipeAnalyzer<'a> {
    config: &'a RecipeIntelligenceConfig,
}

impl RecipeAnalyzer<'static> {
    /// Create a pipeline using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RecipeIntelligenceConfig::global())
    }
}

impl Default for RecipeAnalyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> RecipeAnalyzer<'a> {
    /// Create a pipeline with a custom configuration
    #[must_use]
    pub const fn with_config(config: &'a RecipeIntelligenceConfig) -> Self {
        Self { config }
    }

    /// Analyze a recipe
    ///
    /// Calorie and difficulty analysis share nothing and run on the rayon pool;
    /// time prediction needs the step count and suggestions need everything.
    #[must_use]
    pub fn analyze(&self, recipe: &RecipeInput) -> RecipeAnalysis {
        let started = Instant::now();
        let ingredients: Vec<&str> = recipe
            .ingredients
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();
        let steps = recipe.steps.as_str();

        let (calories, difficulty) = rayon::join(
            || {
                CalorieEstimator::with_config(&self.config.calories)
                    .estimate_calories(ingredients.as_slice())
            },
            || {
                DifficultyAnalyzer::with_config(&self.config.difficulty)
                    .analyze_difficulty(ingredients.as_slice(), steps)
            },
        );

        let time = TimePredictor::with_config(&self.config.timing)
            .predict_time(steps, difficulty.step_count);

        let suggestions = SuggestionGenerator::with_config(&self.config.suggestions)
            .generate_suggestions(
                ingredients.as_slice(),
                steps,
                difficulty.difficulty,
                calories.total_calories,
                calories.servings_estimate,
            );

        debug!(
            recipe.name = %recipe.recipe_name,
            recipe.ingredients = ingredients.len(),
            recipe.steps = difficulty.step_count,
            calories.total = calories.total_calories,
            difficulty.level = %difficulty.difficulty,
            time.total_minutes = time.total_minutes,
            duration_us = started.elapsed().as_micros() as u64,
            "Recipe analyzed"
        );

        RecipeAnalysis {
            calories: calories.into(),
            difficulty: difficulty.into(),
            time: time.into(),
            suggestions: suggestions.into(),
        }
    }

    /// Calorie table keys for autocomplete, sorted ascending
    #[must_use]
    pub fn known_ingredients(&self) -> IngredientCatalog {
        let ingredients =
            CalorieEstimator::with_config(&self.config.calories).known_ingredients();
        IngredientCatalog {
            count: ingredients.len(),
            ingredients,
        }
    }
}

impl From<CalorieResult> for CalorieSummary {
    fn from(result: CalorieResult) -> Self {
        let servings = result.servings_estimate.max(1);
        Self {
            total: result.total_calories,
            per_serving: per_serving(result.total_calories, servings),
            servings,
            breakdown: result.breakdown,
        }
    }
}

impl From<DifficultyResult> for DifficultySummary {
    fn from(result: DifficultyResult) -> Self {
        Self {
            level: result.difficulty,
            description: result.description,
            score: result.score,
            factors: result.factors,
            techniques: result.techniques_found,
            stats: RecipeStats {
                ingredients: result.ingredient_count,
                steps: result.step_count,
            },
        }
    }
}

impl From<TimeResult> for TimeSummary {
    fn from(result: TimeResult) -> Self {
        Self {
            category: result.category,
            total_minutes: result.total_minutes,
            display: result.time_display,
            description: result.description,
            methods: result.methods_detected,
        }
    }
}

impl From<SuggestionResult> for SuggestionSummary {
    fn from(result: SuggestionResult) -> Self {
        Self {
            diet_type: result.diet_type,
            meal_type: result.meal_type,
            healthy_alternatives: result.healthy_alternatives,
            spice_recommendations: result.spice_suggestions,
            serving_tips: result.serving_tips,
            quick_tip: result.quick_tip,
        }
    }
}
