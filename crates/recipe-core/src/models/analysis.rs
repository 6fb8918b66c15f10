// ABOUTME: Recipe input and the nested analysis structure returned to callers
// ABOUTME: Field names match the JSON contract consumed by the web client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::classification::{DifficultyLevel, MealType, TimeCategory};
use crate::constants::defaults;
use serde::{Deserialize, Serialize};

/// A recipe that has passed request validation
///
/// Ingredients are trimmed and blank entries dropped on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInput {
    /// Display name, defaults to "Untitled Recipe"
    pub recipe_name: String,
    /// Ingredient lines in input order
    pub ingredients: Vec<String>,
    /// Free-text procedure
    pub steps: String,
}

impl RecipeInput {
    /// Build an input, applying the default name and trimming ingredient lines
    #[must_use]
    pub fn new(
        recipe_name: Option<&str>,
        ingredients: impl IntoIterator<Item = impl AsRef<str>>,
        steps: impl Into<String>,
    ) -> Self {
        let recipe_name = recipe_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(defaults::RECIPE_NAME)
            .to_owned();

        let ingredients = ingredients
            .into_iter()
            .map(|line| line.as_ref().trim().to_owned())
            .filter(|line| !line.is_empty())
            .collect();

        Self {
            recipe_name,
            ingredients,
            steps: steps.into(),
        }
    }
}

/// Complete analysis of a single recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeAnalysis {
    /// Calorie estimate
    pub calories: CalorieSummary,
    /// Difficulty rating
    pub difficulty: DifficultySummary,
    /// Cooking time prediction
    pub time: TimeSummary,
    /// Contextual suggestions
    pub suggestions: SuggestionSummary,
}

/// Calorie section of the analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieSummary {
    /// Sum of all breakdown entries (kcal)
    pub total: u32,
    /// `round(total / servings)`
    pub per_serving: u32,
    /// Estimated servings, always at least 1
    pub servings: u32,
    /// Per-ingredient contributions in input order
    pub breakdown: Vec<CalorieBreakdownEntry>,
}

/// Calorie contribution of one ingredient line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieBreakdownEntry {
    /// Ingredient line as provided
    pub ingredient: String,
    /// Resolved calories (kcal)
    pub calories: u32,
    /// Calorie database key that matched, `None` when the fallback was used
    pub matched: Option<String>,
}

/// Difficulty section of the analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultySummary {
    /// Difficulty band
    pub level: DifficultyLevel,
    /// Fixed description for the band
    pub description: String,
    /// Weighted complexity score
    pub score: f64,
    /// Human readable contributing reasons
    pub factors: Vec<String>,
    /// Advanced techniques detected, in order of first appearance
    pub techniques: Vec<String>,
    /// Raw counts behind the score
    pub stats: RecipeStats,
}

/// Ingredient and step counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStats {
    /// Number of non-blank ingredient lines
    pub ingredients: usize,
    /// Number of detected steps
    pub steps: usize,
}

/// Time section of the analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSummary {
    /// Time band
    pub category: TimeCategory,
    /// Estimated total minutes
    pub total_minutes: u32,
    /// Human readable duration, e.g. "1 hour 15 minutes"
    pub display: String,
    /// Fixed description for the band
    pub description: String,
    /// Cooking methods detected, in order of first appearance
    pub methods: Vec<String>,
}

/// Suggestion section of the analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionSummary {
    /// Diet label, e.g. "Vegetarian" or "Vegan (Gluten-Free)"
    pub diet_type: String,
    /// Meal classification
    pub meal_type: MealType,
    /// Healthier substitutions for matched ingredients
    pub healthy_alternatives: Vec<String>,
    /// Spice pairings for matched ingredients
    pub spice_recommendations: Vec<String>,
    /// Serving advice
    pub serving_tips: Vec<String>,
    /// One tip chosen by difficulty level
    pub quick_tip: String,
}

/// Known calorie database keys, for autocomplete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientCatalog {
    /// Number of keys
    pub count: usize,
    /// Keys sorted ascending
    pub ingredients: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_input_defaults_blank_name() {
        let input = RecipeInput::new(Some("   "), ["egg"], "Boil the egg.");
        assert_eq!(input.recipe_name, "Untitled Recipe");

        let input = RecipeInput::new(None, ["egg"], "Boil the egg.");
        assert_eq!(input.recipe_name, "Untitled Recipe");
    }

    #[test]
    fn test_recipe_input_trims_ingredients() {
        let input = RecipeInput::new(Some(" Omelette "), ["  2 eggs ", "", "   ", "salt"], "Cook.");
        assert_eq!(input.recipe_name, "Omelette");
        assert_eq!(input.ingredients, vec!["2 eggs".to_owned(), "salt".to_owned()]);
    }
}
