// ABOUTME: Difficulty scoring configuration for the recipe difficulty analyzer
// ABOUTME: Configures score weights, level bands, level descriptions, and technique vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{ensure_unique_keywords, ConfigError};
use crate::banding::{Band, Banding};
use recipe_core::models::DifficultyLevel;
use serde::{Deserialize, Serialize};

/// Difficulty analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    /// Score weights per counted item
    pub weights: DifficultyWeights,
    /// Score bands mapped to levels
    pub levels: Banding<DifficultyLevel>,
    /// Fixed description per level
    pub descriptions: DifficultyDescriptions,
    /// Advanced technique vocabulary
    pub techniques: Vec<String>,
    /// Phrases removed before technique detection, e.g. "smoked paprika"
    pub technique_exceptions: Vec<String>,
}

/// Weights of the difficulty score terms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyWeights {
    /// Points per ingredient (1.0)
    pub ingredient: f64,
    /// Points per step (1.5)
    pub step: f64,
    /// Points per distinct advanced technique (7.5)
    pub technique: f64,
}

/// Level descriptions shown alongside the rating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyDescriptions {
    /// Easy description
    pub easy: String,
    /// Medium description
    pub medium: String,
    /// Hard description
    pub hard: String,
}

impl DifficultyDescriptions {
    /// Description for a level
    #[must_use]
    pub fn for_level(&self, level: DifficultyLevel) -> &str {
        match level {
            DifficultyLevel::Easy => &self.easy,
            DifficultyLevel::Medium => &self.medium,
            DifficultyLevel::Hard => &self.hard,
        }
    }
}

impl DifficultyConfig {
    /// Validate weights, bands, and the technique vocabulary
    ///
    /// # Errors
    ///
    /// Returns an error if a weight is negative or not finite, the level bands
    /// are unordered, or a technique is empty or repeated
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [self.weights.ingredient, self.weights.step, self.weights.technique];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "difficulty weights must be finite and non-negative",
            ));
        }

        self.levels
            .validate("difficulty level bounds must be finite and strictly increasing")?;

        ensure_unique_keywords("difficulty.techniques", &self.techniques)
    }
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            weights: DifficultyWeights::default(),
            levels: Banding::new(
                vec![
                    Band::new(10.0, DifficultyLevel::Easy),
                    Band::new(18.0, DifficultyLevel::Medium),
                ],
                DifficultyLevel::Hard,
            ),
            descriptions: DifficultyDescriptions::default(),
            techniques: [
                "julienne",
                "sous vide",
                "flambé",
                "reduction",
                "fold",
                "temper",
                "emulsify",
                "deglaze",
                "caramelize",
                "brunoise",
                "chiffonade",
                "confit",
                "blanch",
                "poach",
                "knead",
                "proof",
                "laminate",
                "clarify",
                "truss",
                "debone",
                "fillet",
                "smoke",
                "cure",
                "ferment",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            technique_exceptions: [
                "smoked paprika",
                "smoked salmon",
                "smoked sausage",
                "smoked ham",
                "liquid smoke",
                "cured ham",
                "cured meat",
                "cured sausage",
                "fermented soy",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        }
    }
}

impl Default for DifficultyWeights {
    fn default() -> Self {
        Self {
            ingredient: 1.0,
            step: 1.5,
            technique: 7.5,
        }
    }
}

impl Default for DifficultyDescriptions {
    fn default() -> Self {
        Self {
            easy: "Simple recipe suitable for beginners".to_owned(),
            medium: "Requires some cooking experience".to_owned(),
            hard: "Challenging recipe for experienced cooks".to_owned(),
        }
    }
}
