// ABOUTME: Tests for calorie estimation from ingredient lines
// ABOUTME: Covers table lookup, specificity, default calories, and servings banding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_intelligence::config::intelligence::{CalorieConfig, CalorieEntry};
use recipe_intelligence::{Band, Banding, CalorieEstimator};

fn estimator() -> CalorieEstimator<'static> {
    CalorieEstimator::new()
}

#[test]
fn test_known_ingredients_sum() {
    let result = estimator().estimate_calories(&["200g chicken breast", "1 cup rice", "1 cup broccoli"]);

    assert_eq!(result.total_calories, 165 + 205 + 31);
    assert_eq!(result.servings_estimate, 2);
    assert_eq!(result.breakdown.len(), 3);
    assert_eq!(result.matched.len(), 3);
}

#[test]
fn test_most_specific_key_wins() {
    let entry = estimator().estimate_ingredient("2 chicken breasts, diced");
    assert_eq!(entry.matched.as_deref(), Some("chicken breast"));
    assert_eq!(entry.calories, 165);

    let entry = estimator().estimate_ingredient("1 cup almond milk");
    assert_eq!(entry.matched.as_deref(), Some("almond milk"));
    assert_eq!(entry.calories, 40);
}

#[test]
fn test_unknown_ingredient_uses_default() {
    let entry = estimator().estimate_ingredient("1 dragon fruit");
    assert_eq!(entry.matched, None);
    assert_eq!(entry.calories, 50);
    assert_eq!(entry.ingredient, "1 dragon fruit");
}

#[test]
fn test_fraction_quantities_are_ignored() {
    let entry = estimator().estimate_ingredient("1 1/2 cups all-purpose flour");
    assert_eq!(entry.matched.as_deref(), Some("flour"));
    assert_eq!(entry.calories, 455);
}

#[test]
fn test_case_insensitive_lookup() {
    let entry = estimator().estimate_ingredient("2 Large EGGS");
    assert_eq!(entry.matched.as_deref(), Some("egg"));
}

#[test]
fn test_empty_list() {
    let empty: [&str; 0] = [];
    let result = estimator().estimate_calories(&empty);

    assert_eq!(result.total_calories, 0);
    assert!(result.breakdown.is_empty());
    assert!(result.servings_estimate >= 1);
}

#[test]
fn test_blank_lines_skipped() {
    let result = estimator().estimate_calories(&["", "  ", "1 banana"]);
    assert_eq!(result.breakdown.len(), 1);
    assert_eq!(result.total_calories, 105);
}

#[test]
fn test_breakdown_preserves_input_order() {
    let result = estimator().estimate_calories(&["1 apple", "1 banana", "1 apple"]);
    let names: Vec<&str> = result
        .breakdown
        .iter()
        .map(|entry| entry.ingredient.as_str())
        .collect();
    assert_eq!(names, vec!["1 apple", "1 banana", "1 apple"]);
    assert_eq!(result.total_calories, 95 + 105 + 95);
}

#[test]
fn test_servings_bands() {
    let estimator = estimator();
    assert_eq!(estimator.servings_for(0), 2);
    assert_eq!(estimator.servings_for(3), 2);
    assert_eq!(estimator.servings_for(4), 4);
    assert_eq!(estimator.servings_for(7), 6);
    assert_eq!(estimator.servings_for(10), 8);
    assert_eq!(estimator.servings_for(40), 8);
}

#[test]
fn test_adding_ingredient_never_lowers_total() {
    let estimator = estimator();
    let base = vec!["1 cup rice", "1 onion"];
    let mut more = base.clone();
    more.push("1 tsp salt");

    let before = estimator.estimate_calories(&base).total_calories;
    let after = estimator.estimate_calories(&more).total_calories;
    assert!(after >= before);
}

#[test]
fn test_known_ingredients_sorted() {
    let keys = estimator().known_ingredients();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert!(keys.contains(&"chicken breast".to_owned()));
}

#[test]
fn test_custom_config() {
    let config = CalorieConfig {
        default_calories: 10,
        database: vec![CalorieEntry::new("kale", 33)],
        servings: Banding::new(vec![Band::new(2.0, 1)], 3),
    };
    let estimator = CalorieEstimator::with_config(&config);
    let result = estimator.estimate_calories(&["kale", "quinoa"]);

    assert_eq!(result.total_calories, 43);
    assert_eq!(result.servings_estimate, 3);
    assert_eq!(estimator.known_ingredients(), vec!["kale".to_owned()]);
}
