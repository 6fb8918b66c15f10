// ABOUTME: Cooking time prediction from step count and detected cooking methods
// ABOUTME: Adds per-step time and method durations onto a preparation floor and bands the total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::intelligence::{RecipeIntelligenceConfig, TimingConfig};
use crate::text::{matches_in_order, normalize, strip_phrases};
use recipe_core::models::TimeCategory;
use serde::{Deserialize, Serialize};

/// Predicted cooking time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeResult {
    /// Banded category
    pub category: TimeCategory,
    /// Estimated minutes, never below the preparation floor
    pub total_minutes: u32,
    /// Human readable duration
    pub time_display: String,
    /// Fixed description for the category
    pub description: String,
    /// Cooking methods found in the steps, in order of first appearance
    pub methods_detected: Vec<String>,
}

/// Predicts how long a recipe takes
pub struct TimePredictor<'a> {
    config: &'a TimingConfig,
}

impl TimePredictor<'static> {
    /// Create a predictor using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&RecipeIntelligenceConfig::global().timing)
    }
}

impl Default for TimePredictor<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TimePredictor<'a> {
    /// Create a predictor with a custom configuration
    #[must_use]
    pub const fn with_config(config: &'a TimingConfig) -> Self {
        Self { config }
    }

    /// Predict total cooking time
    ///
    /// `total = base_prep + minutes_per_step * step_count + sum(method durations)`.
    /// Method durations stack, so a recipe that marinates and then grills
    /// counts both.
    #[must_use]
    pub fn predict_time(&self, steps_text: &str, step_count: usize) -> TimeResult {
        let scanned = strip_phrases(&normalize(steps_text), &self.config.method_exceptions);
        let methods = matches_in_order(&scanned, &self.config.methods);

        let step_minutes = u32::try_from(step_count)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.config.minutes_per_step);
        let method_minutes = methods
            .iter()
            .fold(0_u32, |total, method| total.saturating_add(method.minutes));
        let total_minutes = self
            .config
            .base_prep_minutes
            .max(1)
            .saturating_add(step_minutes)
            .saturating_add(method_minutes);

        let category = *self.config.categories.classify(f64::from(total_minutes));

        TimeResult {
            category,
            total_minutes,
            time_display: format_duration(total_minutes),
            description: self.config.descriptions.for_category(category).to_owned(),
            methods_detected: methods.into_iter().map(|m| m.keyword.clone()).collect(),
        }
    }
}

/// Format minutes as "45 minutes", "1 hour", or "2 hours 5 minutes"
#[must_use]
pub fn format_duration(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    let minutes_text = match minutes {
        1 => "1 minute".to_owned(),
        m => format!("{m} minutes"),
    };

    match (hours, minutes) {
        (0, _) => minutes_text,
        (1, 0) => "1 hour".to_owned(),
        (h, 0) => format!("{h} hours"),
        (1, _) => format!("1 hour {minutes_text}"),
        (h, _) => format!("{h} hours {minutes_text}"),
    }
}
