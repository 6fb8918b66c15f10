// ABOUTME: Core data models shared by the analysis engine and the HTTP layer
// ABOUTME: Re-exports classification enums and the nested recipe analysis structure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Classification enums (difficulty, time, diet, meal)
pub mod classification;
/// Nested analysis response structure and validated recipe input
pub mod analysis;

pub use analysis::{
    CalorieBreakdownEntry, CalorieSummary, DifficultySummary, IngredientCatalog, RecipeAnalysis,
    RecipeInput, RecipeStats, SuggestionSummary, TimeSummary,
};
pub use classification::{DietType, DifficultyLevel, MealType, TimeCategory};
