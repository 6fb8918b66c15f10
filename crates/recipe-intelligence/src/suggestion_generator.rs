// ABOUTME: Contextual recipe suggestions from ingredients, steps, and prior analysis results
// ABOUTME: Classifies diet and meal type and collects substitution, spice, and serving advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Suggestion generation.
//!
//! Everything here is table driven and deterministic: identical inputs always
//! produce identical suggestions.

use crate::calorie_estimator::per_serving;
use crate::config::intelligence::{Pairing, RecipeIntelligenceConfig, SuggestionConfig};
use crate::text::{contains_keyword, longest_match, normalize, push_unique, strip_quantities};
use recipe_core::models::{DietType, DifficultyLevel, MealType};
use serde::{Deserialize, Serialize};

/// Suggestions for a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    /// Display label combining diet and gluten status, e.g. "Vegan (Gluten-Free)"
    pub diet_type: String,
    /// Classified diet
    pub diet: DietType,
    /// No gluten marker was found
    pub gluten_free: bool,
    /// Classified meal
    pub meal_type: MealType,
    /// Substitutions, deduplicated, in ingredient order
    pub healthy_alternatives: Vec<String>,
    /// Spice pairings, deduplicated, in ingredient order
    pub spice_suggestions: Vec<String>,
    /// Serving advice
    pub serving_tips: Vec<String>,
    /// Tip for the difficulty level
    pub quick_tip: String,
}

/// Produces diet, meal, and advisory suggestions
pub struct SuggestionGenerator<'a> {
    config: &'a SuggestionConfig,
}

impl SuggestionGenerator<'static> {
    /// Create a generator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&RecipeIntelligenceConfig::global().suggestions)
    }
}

impl Default for SuggestionGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SuggestionGenerator<'a> {
    /// Create a generator with a custom configuration
    #[must_use]
    pub const fn with_config(config: &'a SuggestionConfig) -> Self {
        Self { config }
    }

    /// Generate suggestions from the recipe and the earlier analysis results
    #[must_use]
    pub fn generate_suggestions<S: AsRef<str>>(
        &self,
        ingredients: &[S],
        steps_text: &str,
        difficulty_level: DifficultyLevel,
        total_calories: u32,
        servings_estimate: u32,
    ) -> SuggestionResult {
        let lines: Vec<String> = ingredients
            .iter()
            .map(|line| strip_quantities(line.as_ref()))
            .filter(|line| !line.is_empty())
            .collect();

        let diet = self.classify_diet(&lines);
        let gluten_free = !lines.iter().any(|line| self.config.gluten.found_in(line));
        let diet_type = if gluten_free {
            format!("{diet}{}", self.config.gluten_free_suffix)
        } else {
            diet.to_string()
        };

        SuggestionResult {
            diet_type,
            diet,
            gluten_free,
            meal_type: self.classify_meal(&lines, steps_text),
            healthy_alternatives: collect_pairings(&lines, &self.config.alternatives),
            spice_suggestions: collect_pairings(&lines, &self.config.spices),
            serving_tips: self.serving_tips(total_calories, servings_estimate),
            quick_tip: self.config.quick_tips.for_level(difficulty_level).to_owned(),
        }
    }

    /// First diet in rule order with no disqualifying marker, else the fallback
    fn classify_diet(&self, lines: &[String]) -> DietType {
        self.config
            .diets
            .iter()
            .find(|rule| !lines.iter().any(|line| rule.disqualifiers.found_in(line)))
            .map_or(self.config.fallback_diet, |rule| rule.diet)
    }

    /// Meal rule with the most distinct keyword hits; ties keep rule order
    fn classify_meal(&self, lines: &[String], steps_text: &str) -> MealType {
        // " . " keeps multi-word keywords from matching across line boundaries
        let mut haystack = lines.join(" . ");
        haystack.push_str(" . ");
        haystack.push_str(&normalize(steps_text));

        let mut best: Option<(MealType, usize)> = None;
        for rule in &self.config.meals {
            let hits = rule
                .keywords
                .iter()
                .filter(|keyword| contains_keyword(&haystack, &normalize(keyword)))
                .count();
            if hits > 0 && best.is_none_or(|(_, best_hits)| hits > best_hits) {
                best = Some((rule.meal, hits));
            }
        }

        best.map_or(self.config.fallback_meal, |(meal, _)| meal)
    }

    fn serving_tips(&self, total_calories: u32, servings_estimate: u32) -> Vec<String> {
        let servings = servings_estimate.max(1);
        let mut tips = vec![self
            .config
            .serving_tips
            .classify(f64::from(servings))
            .clone()];

        let calorie_tips = &self.config.calorie_tips;
        let per_serving = per_serving(total_calories, servings);
        if per_serving >= calorie_tips.high_per_serving {
            tips.push(calorie_tips.high_tip.clone());
        } else if per_serving < calorie_tips.low_per_serving {
            tips.push(calorie_tips.low_tip.clone());
        }

        tips
    }
}

/// Advice for each line's most specific table match, deduplicated, in line order
fn collect_pairings(lines: &[String], table: &[Pairing]) -> Vec<String> {
    let mut suggestions = Vec::new();
    for line in lines {
        if let Some(pairing) = longest_match(line, table) {
            push_unique(&mut suggestions, &pairing.suggestion);
        }
    }
    suggestions
}
