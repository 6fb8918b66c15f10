// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and canned recipes used across analyzer and route tests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `recipe_analyzer`

use recipe_core::models::RecipeInput;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG raises verbosity for debugging a failing test
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Simple weeknight dinner: chicken, rice, broccoli
pub fn chicken_rice_recipe() -> RecipeInput {
    RecipeInput::new(
        Some("Chicken Rice Bowl"),
        ["200g chicken breast", "1 cup rice", "1 cup broccoli"],
        "Cook the rice.\nGrill the chicken for 10 minutes.\nSteam the broccoli and serve.",
    )
}

/// Plant-based breakfast with no gluten markers
pub fn vegan_oatmeal_recipe() -> RecipeInput {
    RecipeInput::new(
        Some("Berry Oatmeal"),
        ["1 cup oats", "1 cup almond milk", "1 banana", "1/2 cup blueberries"],
        "Simmer the oats in almond milk.\nTop with banana and blueberries.",
    )
}

/// Technique-heavy dish that should land in the hardest band
pub fn advanced_recipe() -> RecipeInput {
    RecipeInput::new(
        Some("Sous Vide Steak Flambé"),
        [
            "2 beef steaks",
            "2 tbsp butter",
            "1/4 cup brandy",
            "2 cloves garlic",
            "1 sprig rosemary",
            "salt",
            "black pepper",
        ],
        "Season the steaks.\nCook sous vide at 54C for 2 hours.\nSear in butter with garlic and rosemary.\nAdd brandy and flambé.\nTemper the sauce and emulsify with butter.\nRest and slice.",
    )
}
