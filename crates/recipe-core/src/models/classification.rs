// ABOUTME: Discrete classifications produced by the recipe analyzers
// ABOUTME: Difficulty levels, time categories, diet types, and meal types with display text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Overall recipe difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DifficultyLevel {
    /// Few ingredients and steps, no advanced techniques
    Easy,
    /// Moderate length or a single advanced technique
    Medium,
    /// Long recipes or several advanced techniques
    Hard,
}

impl DifficultyLevel {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl Display for DifficultyLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Cooking time bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeCategory {
    /// Under half an hour
    Quick,
    /// Up to an hour
    Moderate,
    /// A couple of hours
    Long,
    /// Half a day or more of mostly unattended time
    Extended,
}

impl TimeCategory {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quick => "Quick",
            Self::Moderate => "Moderate",
            Self::Long => "Long",
            Self::Extended => "Extended",
        }
    }
}

impl Display for TimeCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Dietary classification derived from ingredient markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// Fish but no meat
    Pescatarian,
    /// Contains meat
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
}

impl DietType {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegan => "Vegan",
            Self::Vegetarian => "Vegetarian",
            Self::Pescatarian => "Pescatarian",
            Self::NonVegetarian => "Non-Vegetarian",
        }
    }
}

impl Display for DietType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Meal classification derived from ingredient and step keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    /// Morning dishes
    Breakfast,
    /// Sweet dishes and baked treats
    Dessert,
    /// Broths, stews, and soups
    Soup,
    /// Raw or lightly dressed vegetables
    Salad,
    /// Drinks and smoothies
    Beverage,
    /// Default lunch/dinner classification
    #[serde(rename = "Main Course")]
    MainCourse,
}

impl MealType {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Dessert => "Dessert",
            Self::Soup => "Soup",
            Self::Salad => "Salad",
            Self::Beverage => "Beverage",
            Self::MainCourse => "Main Course",
        }
    }
}

impl Display for MealType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
