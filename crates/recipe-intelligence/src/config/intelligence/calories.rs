// ABOUTME: Calorie estimation configuration with the built-in ingredient calorie table
// ABOUTME: Configures calories per typical unit, the fallback estimate, and servings banding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Calorie Estimation Configuration
//!
//! Calories are per typical household unit as written in a home recipe (one
//! egg, one cup of flour, one tablespoon of butter). Quantities in the
//! ingredient line are not scaled.

use super::{ensure_unique_keywords, ConfigError};
use crate::banding::{Band, Banding};
use crate::text::Keyword;
use serde::{Deserialize, Serialize};

/// Calorie estimator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalorieConfig {
    /// Fallback estimate for an ingredient with no table match (kcal)
    pub default_calories: u32,
    /// Ingredient keyword table, most specific lookups win
    pub database: Vec<CalorieEntry>,
    /// Servings estimate by ingredient count
    pub servings: Banding<u32>,
}

/// One calorie table entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieEntry {
    /// Ingredient keyword, e.g. "chicken broth"
    pub keyword: String,
    /// Calories per typical unit (kcal)
    pub calories: u32,
}

impl CalorieEntry {
    /// Create a table entry
    #[must_use]
    pub fn new(keyword: &str, calories: u32) -> Self {
        Self {
            keyword: keyword.to_owned(),
            calories,
        }
    }
}

impl Keyword for CalorieEntry {
    fn keyword(&self) -> &str {
        &self.keyword
    }
}

impl CalorieConfig {
    /// Validate table keys and servings bands
    ///
    /// # Errors
    ///
    /// Returns an error if a key is empty or repeated, or if the servings bands
    /// are unordered, decreasing, or below one serving
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_unique_keywords("calories.database", &self.database)?;

        self.servings
            .validate("servings band bounds must be finite and strictly increasing")?;

        let labels: Vec<u32> = self.servings.labels().copied().collect();
        if labels.contains(&0) {
            return Err(ConfigError::ValueOutOfRange(
                "servings estimates must be at least 1",
            ));
        }
        if labels.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::InvalidRange(
                "servings estimates must not decrease as ingredient count grows",
            ));
        }

        Ok(())
    }
}

impl Default for CalorieConfig {
    fn default() -> Self {
        Self {
            default_calories: 50,
            database: default_database(),
            servings: Banding::new(
                vec![Band::new(4.0, 2), Band::new(7.0, 4), Band::new(10.0, 6)],
                8,
            ),
        }
    }
}

fn default_database() -> Vec<CalorieEntry> {
    [
        // Proteins
        ("egg", 70),
        ("egg white", 17),
        ("chicken", 335),
        ("chicken breast", 165),
        ("chicken thigh", 210),
        ("beef", 250),
        ("ground beef", 290),
        ("pork", 242),
        ("bacon", 45),
        ("ham", 145),
        ("sausage", 230),
        ("turkey", 190),
        ("lamb", 280),
        ("salmon", 208),
        ("tuna", 130),
        ("shrimp", 100),
        ("cod", 90),
        ("tofu", 95),
        ("chickpeas", 270),
        ("lentils", 230),
        ("black beans", 225),
        // Dairy
        ("milk", 150),
        ("almond milk", 40),
        ("coconut milk", 445),
        ("butter", 100),
        ("cheese", 110),
        ("parmesan", 22),
        ("mozzarella", 85),
        ("cream", 51),
        ("heavy cream", 51),
        ("sour cream", 30),
        ("cream cheese", 50),
        ("yogurt", 150),
        // Grains and baking
        ("flour", 455),
        ("whole wheat flour", 408),
        ("sugar", 770),
        ("brown sugar", 830),
        ("honey", 64),
        ("maple syrup", 52),
        ("rice", 205),
        ("pasta", 220),
        ("spaghetti", 220),
        ("bread", 80),
        ("tortilla", 140),
        ("oats", 300),
        ("breadcrumbs", 110),
        ("chocolate", 155),
        ("cocoa", 12),
        ("baking powder", 2),
        ("baking soda", 0),
        ("vanilla", 12),
        // Fats and oils
        ("oil", 120),
        ("olive oil", 119),
        ("coconut oil", 117),
        ("mayonnaise", 94),
        // Vegetables
        ("onion", 44),
        ("garlic", 4),
        ("tomato", 22),
        ("potato", 163),
        ("sweet potato", 112),
        ("carrot", 25),
        ("celery", 6),
        ("bell pepper", 24),
        ("broccoli", 31),
        ("spinach", 7),
        ("lettuce", 5),
        ("cucumber", 45),
        ("mushroom", 15),
        ("zucchini", 33),
        ("corn", 132),
        ("peas", 117),
        ("avocado", 240),
        // Fruit and nuts
        ("banana", 105),
        ("apple", 95),
        ("lemon", 17),
        ("lime", 20),
        ("strawberries", 49),
        ("blueberries", 85),
        ("almonds", 164),
        ("walnuts", 185),
        ("peanut butter", 95),
        // Liquids and seasonings
        ("chicken broth", 15),
        ("vegetable broth", 10),
        ("beef broth", 17),
        ("stock", 12),
        ("water", 0),
        ("wine", 120),
        ("soy sauce", 9),
        ("vinegar", 3),
        ("salt", 0),
        ("pepper", 6),
    ]
    .into_iter()
    .map(|(keyword, calories)| CalorieEntry::new(keyword, calories))
    .collect()
}
