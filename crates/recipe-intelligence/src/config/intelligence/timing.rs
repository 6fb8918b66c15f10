// ABOUTME: Cooking time configuration for the time predictor
// ABOUTME: Configures per-step time, preparation floor, method durations, and time categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{ensure_unique_keywords, ConfigError};
use crate::banding::{Band, Banding};
use crate::text::Keyword;
use recipe_core::models::TimeCategory;
use serde::{Deserialize, Serialize};

/// Time predictor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Fixed preparation time added to every recipe, the floor for `total_minutes`
    pub base_prep_minutes: u32,
    /// Active minutes per detected step
    pub minutes_per_step: u32,
    /// Cooking methods and their typical durations
    pub methods: Vec<CookingMethod>,
    /// Phrases removed before method detection, e.g. "baking powder"
    pub method_exceptions: Vec<String>,
    /// Total minutes mapped to categories
    pub categories: Banding<TimeCategory>,
    /// Fixed description per category
    pub descriptions: TimeDescriptions,
}

/// A cooking method keyword with its typical duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingMethod {
    /// Method keyword, e.g. "simmer"
    pub keyword: String,
    /// Typical duration in minutes
    pub minutes: u32,
}

impl CookingMethod {
    /// Create a method entry
    #[must_use]
    pub fn new(keyword: &str, minutes: u32) -> Self {
        Self {
            keyword: keyword.to_owned(),
            minutes,
        }
    }
}

impl Keyword for CookingMethod {
    fn keyword(&self) -> &str {
        &self.keyword
    }
}

/// Category descriptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeDescriptions {
    /// Quick description
    pub quick: String,
    /// Moderate description
    pub moderate: String,
    /// Long description
    pub long: String,
    /// Extended description
    pub extended: String,
}

impl TimeDescriptions {
    /// Description for a category
    #[must_use]
    pub fn for_category(&self, category: TimeCategory) -> &str {
        match category {
            TimeCategory::Quick => &self.quick,
            TimeCategory::Moderate => &self.moderate,
            TimeCategory::Long => &self.long,
            TimeCategory::Extended => &self.extended,
        }
    }
}

impl TimingConfig {
    /// Validate the preparation floor, category bands, and method vocabulary
    ///
    /// # Errors
    ///
    /// Returns an error if the preparation or per-step time is zero, the category bands are
    /// unordered, or a method keyword is empty or repeated
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_prep_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "base_prep_minutes must be at least 1",
            ));
        }
        if self.minutes_per_step == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "minutes_per_step must be at least 1",
            ));
        }

        self.categories
            .validate("time category bounds must be finite and strictly increasing")?;

        ensure_unique_keywords("timing.methods", &self.methods)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            base_prep_minutes: 5,
            minutes_per_step: 5,
            methods: [
                ("bake", 30),
                ("roast", 45),
                ("grill", 15),
                ("fry", 10),
                ("sauté", 8),
                ("simmer", 20),
                ("boil", 10),
                ("steam", 15),
                ("marinate", 30),
                ("braise", 90),
                ("slow cook", 240),
                ("refrigerate", 60),
            ]
            .into_iter()
            .map(|(keyword, minutes)| CookingMethod::new(keyword, minutes))
            .collect(),
            method_exceptions: [
                "baking powder",
                "baking soda",
                "baking sheet",
                "baking dish",
                "baking tray",
                "baking paper",
                "steamed rice",
                "roasted red pepper",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            categories: Banding::new(
                vec![
                    Band::new(30.0, TimeCategory::Quick),
                    Band::new(60.0, TimeCategory::Moderate),
                    Band::new(120.0, TimeCategory::Long),
                ],
                TimeCategory::Extended,
            ),
            descriptions: TimeDescriptions::default(),
        }
    }
}

impl Default for TimeDescriptions {
    fn default() -> Self {
        Self {
            quick: "Ready in under 30 minutes".to_owned(),
            moderate: "Takes about an hour".to_owned(),
            long: "Plan ahead, takes up to two hours".to_owned(),
            extended: "Mostly unattended cooking over several hours".to_owned(),
        }
    }
}
