// ABOUTME: End-to-end tests for the recipe analysis pipeline
// ABOUTME: Checks the combined analysis, cross-analyzer consistency, and idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use recipe_core::models::{DifficultyLevel, MealType, RecipeInput, TimeCategory};
use recipe_intelligence::{RecipeAnalyzer, RecipeIntelligenceConfig};

#[test]
fn test_pancake_batter_recipe() {
    common::init_test_logging();
    let recipe = RecipeInput::new(
        None,
        ["2 eggs", "1 cup flour", "1 cup milk"],
        "Whisk eggs. Add flour and milk. Fry in pan for 5 minutes.",
    );

    let analysis = RecipeAnalyzer::new().analyze(&recipe);

    assert_eq!(recipe.recipe_name, "Untitled Recipe");
    assert_eq!(analysis.difficulty.stats.steps, 3);
    assert_eq!(analysis.difficulty.stats.ingredients, 3);
    assert!(analysis.time.methods.contains(&"fry".to_owned()));
    assert!(analysis.time.total_minutes > 0);
    assert_eq!(analysis.calories.total, 70 + 455 + 150);
    assert_eq!(analysis.suggestions.meal_type, MealType::Breakfast);
    assert_eq!(analysis.suggestions.diet_type, "Vegetarian");
}

#[test]
fn test_chicken_rice_bowl() {
    common::init_test_logging();
    let analysis = RecipeAnalyzer::new().analyze(&common::chicken_rice_recipe());

    assert_eq!(analysis.calories.total, 401);
    assert_eq!(analysis.calories.servings, 2);
    assert_eq!(analysis.calories.per_serving, 200);
    assert_eq!(analysis.difficulty.level, DifficultyLevel::Easy);
    assert_eq!(analysis.time.total_minutes, 50);
    assert_eq!(analysis.time.category, TimeCategory::Moderate);
    assert_eq!(analysis.time.methods, vec!["grill", "steam"]);
    assert_eq!(analysis.suggestions.diet_type, "Non-Vegetarian (Gluten-Free)");
    assert_eq!(analysis.suggestions.meal_type, MealType::MainCourse);
}

#[test]
fn test_vegan_oatmeal() {
    let analysis = RecipeAnalyzer::new().analyze(&common::vegan_oatmeal_recipe());

    assert_eq!(analysis.calories.total, 300 + 40 + 105 + 85);
    assert_eq!(analysis.calories.servings, 4);
    assert_eq!(analysis.suggestions.diet_type, "Vegan (Gluten-Free)");
    assert_eq!(analysis.suggestions.meal_type, MealType::Breakfast);
    assert!(analysis
        .suggestions
        .serving_tips
        .iter()
        .any(|tip| tip.starts_with("Light per serving")));
}

#[test]
fn test_advanced_techniques_are_hard() {
    let analysis = RecipeAnalyzer::new().analyze(&common::advanced_recipe());

    assert_eq!(analysis.difficulty.level, DifficultyLevel::Hard);
    assert!(analysis.difficulty.techniques.contains(&"sous vide".to_owned()));
    assert!(analysis.difficulty.techniques.contains(&"flambé".to_owned()));
    assert_eq!(
        analysis.suggestions.quick_tip,
        "Practice the advanced techniques separately before cooking the full dish"
    );
}

#[test]
fn test_empty_ingredients_still_valid() {
    let recipe = RecipeInput::new(Some("Nothing"), Vec::<String>::new(), "");
    let analysis = RecipeAnalyzer::new().analyze(&recipe);

    assert_eq!(analysis.calories.total, 0);
    assert!(analysis.calories.servings >= 1);
    assert!(analysis.calories.breakdown.is_empty());
    assert!(analysis.time.total_minutes > 0);
    assert_eq!(analysis.difficulty.stats.steps, 0);
}

#[test]
fn test_analysis_is_idempotent() {
    let analyzer = RecipeAnalyzer::new();
    let recipe = common::advanced_recipe();

    assert_eq!(analyzer.analyze(&recipe), analyzer.analyze(&recipe));
}

#[test]
fn test_step_count_shared_between_difficulty_and_time() {
    let config = RecipeIntelligenceConfig::default();
    let analysis = RecipeAnalyzer::with_config(&config).analyze(&common::chicken_rice_recipe());

    let per_step = config.timing.minutes_per_step as usize;
    let methods: u32 = 15 + 15;
    let expected = config.timing.base_prep_minutes as usize
        + per_step * analysis.difficulty.stats.steps
        + methods as usize;
    assert_eq!(analysis.time.total_minutes as usize, expected);
}

#[test]
fn test_more_ingredients_never_fewer_servings() {
    let analyzer = RecipeAnalyzer::new();
    let pantry = [
        "rice", "onion", "garlic", "carrot", "celery", "peas", "corn", "egg", "soy sauce", "oil",
        "ginger",
    ];

    let mut previous = 0;
    for count in 1..=pantry.len() {
        let recipe = RecipeInput::new(None, &pantry[..count], "Stir fry everything.");
        let servings = analyzer.analyze(&recipe).calories.servings;
        assert!(servings >= previous, "servings dropped at {count} ingredients");
        previous = servings;
    }
}

#[test]
fn test_known_ingredients_catalog() {
    let catalog = RecipeAnalyzer::new().known_ingredients();

    assert_eq!(catalog.count, catalog.ingredients.len());
    assert!(catalog.count > 50);
    assert!(catalog.ingredients.windows(2).all(|pair| pair[0] < pair[1]));
}
