// ABOUTME: Suggestion configuration for diet, meal, substitution, spice, and serving advice
// ABOUTME: Holds the rule tables consumed by the suggestion generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Suggestion Configuration
//!
//! Diet rules are evaluated in order and the first diet with no disqualifying
//! marker wins. Meal rules score by distinct keyword hits, ties going to the
//! earlier rule.

use super::{ensure_unique_keywords, ConfigError};
use crate::banding::{Band, Banding};
use crate::text::{contains_keyword, normalize, strip_phrases, Keyword};
use recipe_core::models::{DietType, DifficultyLevel, MealType};
use serde::{Deserialize, Serialize};

/// Suggestion generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Diet rules, most restrictive first
    pub diets: Vec<DietRule>,
    /// Diet used when every rule is disqualified
    pub fallback_diet: DietType,
    /// Gluten markers; when none match the diet label gets `gluten_free_suffix`
    pub gluten: MarkerSet,
    /// Appended to the diet label for gluten-free recipes
    pub gluten_free_suffix: String,
    /// Meal keyword rules in tie-break order
    pub meals: Vec<MealRule>,
    /// Meal used when no keyword matches
    pub fallback_meal: MealType,
    /// Healthier substitutions keyed by ingredient
    pub alternatives: Vec<Pairing>,
    /// Spice pairings keyed by ingredient
    pub spices: Vec<Pairing>,
    /// Serving tip by servings estimate
    pub serving_tips: Banding<String>,
    /// Extra serving tips driven by calories per serving
    pub calorie_tips: CalorieTips,
    /// One tip per difficulty level
    pub quick_tips: QuickTips,
}

/// Keywords that flag an ingredient, minus phrases that only look like a match
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkerSet {
    /// Flagging keywords, e.g. "milk"
    pub markers: Vec<String>,
    /// Phrases removed before scanning, e.g. "almond milk"
    #[serde(default)]
    pub exceptions: Vec<String>,
}

impl MarkerSet {
    fn new(markers: &[&str], exceptions: &[&str]) -> Self {
        Self {
            markers: markers.iter().map(|m| (*m).to_owned()).collect(),
            exceptions: exceptions.iter().map(|e| (*e).to_owned()).collect(),
        }
    }

    /// Whether any marker occurs in normalized `text` once exceptions are removed
    #[must_use]
    pub fn found_in(&self, text: &str) -> bool {
        let cleaned = strip_phrases(text, &self.exceptions);

        self.markers
            .iter()
            .any(|marker| contains_keyword(&cleaned, &normalize(marker)))
    }
}

/// A diet and the markers that rule it out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietRule {
    /// Diet assigned when no disqualifier matches
    pub diet: DietType,
    /// Ingredients incompatible with the diet
    pub disqualifiers: MarkerSet,
}

/// A meal type and its indicative keywords
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRule {
    /// Meal assigned when this rule scores highest
    pub meal: MealType,
    /// Keywords counted over ingredients and steps
    pub keywords: Vec<String>,
}

/// Ingredient keyword with a piece of advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// Ingredient keyword
    pub keyword: String,
    /// Advice shown when the ingredient is present
    pub suggestion: String,
}

impl Keyword for Pairing {
    fn keyword(&self) -> &str {
        &self.keyword
    }
}

/// Serving tips triggered by calories per serving
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieTips {
    /// At or above this many kcal per serving the rich-dish tip is added
    pub high_per_serving: u32,
    /// Tip for rich dishes
    pub high_tip: String,
    /// Below this many kcal per serving the light-dish tip is added
    pub low_per_serving: u32,
    /// Tip for light dishes
    pub low_tip: String,
}

/// Fixed tip per difficulty level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickTips {
    /// Tip for easy recipes
    pub easy: String,
    /// Tip for medium recipes
    pub medium: String,
    /// Tip for hard recipes
    pub hard: String,
}

impl QuickTips {
    /// Tip for a level
    #[must_use]
    pub fn for_level(&self, level: DifficultyLevel) -> &str {
        match level {
            DifficultyLevel::Easy => &self.easy,
            DifficultyLevel::Medium => &self.medium,
            DifficultyLevel::Hard => &self.hard,
        }
    }
}

impl SuggestionConfig {
    /// Validate keyword tables, serving bands, and calorie thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if a keyword table has empty or repeated keys, the
    /// serving tip bands are unordered, or the calorie thresholds are inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_unique_keywords("suggestions.alternatives", &self.alternatives)?;
        ensure_unique_keywords("suggestions.spices", &self.spices)?;
        for rule in &self.meals {
            ensure_unique_keywords("suggestions.meals", &rule.keywords)?;
        }

        self.serving_tips
            .validate("serving tip bounds must be finite and strictly increasing")?;

        if self.calorie_tips.low_per_serving > self.calorie_tips.high_per_serving {
            return Err(ConfigError::InvalidRange(
                "calorie_tips.low_per_serving must be <= high_per_serving",
            ));
        }

        Ok(())
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            diets: default_diets(),
            fallback_diet: DietType::NonVegetarian,
            gluten: MarkerSet::new(
                &[
                    "flour",
                    "bread",
                    "breadcrumbs",
                    "pasta",
                    "spaghetti",
                    "noodle",
                    "wheat",
                    "barley",
                    "rye",
                    "couscous",
                    "tortilla",
                    "cracker",
                    "soy sauce",
                    "beer",
                ],
                &[
                    "almond flour",
                    "rice flour",
                    "coconut flour",
                    "corn tortilla",
                    "rice noodle",
                    "gluten free",
                ],
            ),
            gluten_free_suffix: " (Gluten-Free)".to_owned(),
            meals: default_meals(),
            fallback_meal: MealType::MainCourse,
            alternatives: pairings(&[
                ("butter", "Use olive oil or mashed avocado in place of butter"),
                ("sugar", "Cut the sugar by a third or sweeten with mashed banana"),
                ("flour", "Swap half the flour for whole wheat flour"),
                ("cream", "Use Greek yogurt instead of cream"),
                ("sour cream", "Use plain Greek yogurt instead of sour cream"),
                ("rice", "Try brown rice or cauliflower rice"),
                ("pasta", "Try whole wheat or lentil pasta"),
                ("spaghetti", "Try zucchini noodles instead of spaghetti"),
                ("ground beef", "Use lean ground turkey instead of ground beef"),
                ("beef", "Choose a lean cut of beef"),
                ("bacon", "Use turkey bacon for less saturated fat"),
                ("sausage", "Try chicken sausage for less fat"),
                ("cheese", "Use less of a sharper cheese for the same flavor"),
                ("oil", "Measure the oil or use a cooking spray"),
                ("mayonnaise", "Replace half the mayonnaise with Greek yogurt"),
                ("milk", "Use skim milk or unsweetened almond milk"),
                ("bread", "Choose whole grain bread"),
                ("tortilla", "Use whole wheat tortillas"),
                ("potato", "Try sweet potato for more fiber"),
                ("salt", "Season with herbs and lemon to reduce salt"),
            ]),
            spices: pairings(&[
                ("chicken", "Paprika, thyme and garlic powder suit chicken"),
                ("beef", "Cumin, black pepper and rosemary suit beef"),
                ("pork", "Sage, fennel seed and smoked paprika suit pork"),
                ("lamb", "Rosemary, mint and cumin suit lamb"),
                ("salmon", "Dill and lemon zest brighten salmon"),
                ("fish", "Dill and lemon zest brighten fish"),
                ("shrimp", "Garlic, chili flakes and parsley suit shrimp"),
                ("tofu", "Ginger, garlic and five-spice suit tofu"),
                ("egg", "Chives or smoked paprika lift eggs"),
                ("tomato", "Basil and oregano bring out tomato"),
                ("potato", "Rosemary and garlic suit potatoes"),
                ("mushroom", "Thyme and garlic suit mushrooms"),
                ("carrot", "Ginger or cumin warm up carrots"),
                ("lentils", "Cumin, coriander and turmeric suit lentils"),
                ("chickpeas", "Cumin, coriander and turmeric suit chickpeas"),
                ("rice", "A pinch of saffron or turmeric colors rice"),
                ("pasta", "Red pepper flakes and oregano suit pasta"),
                ("chocolate", "A pinch of cinnamon or chili deepens chocolate"),
                ("apple", "Cinnamon and nutmeg suit apples"),
                ("banana", "Cinnamon or nutmeg suit bananas"),
                ("oats", "Cinnamon and cardamom suit oats"),
            ]),
            serving_tips: Banding::new(
                vec![
                    Band::new(3.0, "Serves two, scale down for a single portion".to_owned()),
                    Band::new(5.0, "Good size for a small family meal".to_owned()),
                    Band::new(7.0, "Family sized, leftovers keep up to 3 days refrigerated".to_owned()),
                ],
                "Large batch, suited to meal prep or entertaining".to_owned(),
            ),
            calorie_tips: CalorieTips {
                high_per_serving: 700,
                high_tip: "Rich dish, balance it with a light salad or steamed vegetables".to_owned(),
                low_per_serving: 250,
                low_tip: "Light per serving, add a side of whole grains or protein for a full meal"
                    .to_owned(),
            },
            quick_tips: QuickTips {
                easy: "Read the recipe through once before you start".to_owned(),
                medium: "Measure and prep every ingredient before turning on the heat".to_owned(),
                hard: "Practice the advanced techniques separately before cooking the full dish"
                    .to_owned(),
            },
        }
    }
}

const MEAT_MARKERS: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "bacon",
    "ham",
    "sausage",
    "turkey",
    "lamb",
    "veal",
    "duck",
    "prosciutto",
    "salami",
    "pepperoni",
    "gelatin",
];

const SEAFOOD_MARKERS: &[&str] = &[
    "fish", "salmon", "tuna", "cod", "tilapia", "sardine", "anchovy", "shrimp", "prawn", "crab",
    "lobster", "clam", "mussel", "oyster", "scallop",
];

const ANIMAL_PRODUCT_MARKERS: &[&str] = &[
    "egg",
    "milk",
    "butter",
    "cheese",
    "parmesan",
    "mozzarella",
    "cream",
    "yogurt",
    "ghee",
    "whey",
    "honey",
    "mayonnaise",
];

const PLANT_BASED_EXCEPTIONS: &[&str] = &[
    "almond milk",
    "oat milk",
    "soy milk",
    "coconut milk",
    "coconut cream",
    "peanut butter",
    "almond butter",
    "cocoa butter",
    "vegan butter",
    "vegan cheese",
];

fn default_diets() -> Vec<DietRule> {
    let meat_and_seafood: Vec<&str> = MEAT_MARKERS.iter().chain(SEAFOOD_MARKERS).copied().collect();
    let all_animal: Vec<&str> = meat_and_seafood
        .iter()
        .chain(ANIMAL_PRODUCT_MARKERS)
        .copied()
        .collect();

    vec![
        DietRule {
            diet: DietType::Vegan,
            disqualifiers: MarkerSet::new(&all_animal, PLANT_BASED_EXCEPTIONS),
        },
        DietRule {
            diet: DietType::Vegetarian,
            disqualifiers: MarkerSet::new(&meat_and_seafood, &[]),
        },
        DietRule {
            diet: DietType::Pescatarian,
            disqualifiers: MarkerSet::new(MEAT_MARKERS, &[]),
        },
    ]
}

fn default_meals() -> Vec<MealRule> {
    let rule = |meal, keywords: &[&str]| MealRule {
        meal,
        keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
    };

    vec![
        rule(
            MealType::Breakfast,
            &[
                "egg",
                "oats",
                "pancake",
                "waffle",
                "cereal",
                "granola",
                "toast",
                "bacon",
                "milk",
                "yogurt",
                "breakfast",
                "muffin",
            ],
        ),
        rule(
            MealType::Dessert,
            &[
                "sugar",
                "chocolate",
                "vanilla",
                "cake",
                "cookie",
                "caramel",
                "dessert",
                "ice cream",
                "cocoa",
                "frosting",
            ],
        ),
        rule(MealType::Soup, &["broth", "stock", "soup", "stew", "chowder"]),
        rule(
            MealType::Salad,
            &["lettuce", "salad", "cucumber", "vinaigrette", "arugula"],
        ),
        rule(
            MealType::Beverage,
            &["smoothie", "juice", "shake", "tea", "coffee", "lemonade"],
        ),
    ]
}

fn pairings(entries: &[(&str, &str)]) -> Vec<Pairing> {
    entries
        .iter()
        .map(|(keyword, suggestion)| Pairing {
            keyword: (*keyword).to_owned(),
            suggestion: (*suggestion).to_owned(),
        })
        .collect()
}
