// ABOUTME: Threshold banding that maps a continuous value onto a discrete label
// ABOUTME: Used for difficulty levels, time categories, servings, and serving tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::intelligence::ConfigError;
use serde::{Deserialize, Serialize};
use std::iter;

/// One band: values strictly below `upper` (and not below the previous band) get `label`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band<L> {
    /// Exclusive upper bound
    pub upper: f64,
    /// Label for values in this band
    pub label: L,
}

impl<L> Band<L> {
    /// Create a band
    pub const fn new(upper: f64, label: L) -> Self {
        Self { upper, label }
    }
}

/// Ordered bands with a ceiling label for everything at or above the last bound
///
/// With strictly increasing finite bounds every `f64` maps to exactly one
/// label; NaN maps to the ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banding<L> {
    /// Bands in ascending order of `upper`
    pub bands: Vec<Band<L>>,
    /// Label for values at or above the last bound
    pub ceiling: L,
}

impl<L> Banding<L> {
    /// Create a banding from ordered bands and a ceiling label
    pub const fn new(bands: Vec<Band<L>>, ceiling: L) -> Self {
        Self { bands, ceiling }
    }

    /// Label of the first band whose bound exceeds `value`, otherwise the ceiling
    #[must_use]
    pub fn classify(&self, value: f64) -> &L {
        self.bands
            .iter()
            .find(|band| value < band.upper)
            .map_or(&self.ceiling, |band| &band.label)
    }

    /// Check that bounds are finite and strictly increasing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` naming `context` when a bound is not
    /// finite or not greater than its predecessor
    pub fn validate(&self, context: &'static str) -> Result<(), ConfigError> {
        if self.bands.iter().any(|band| !band.upper.is_finite()) {
            return Err(ConfigError::InvalidRange(context));
        }
        if self
            .bands
            .windows(2)
            .any(|pair| pair[0].upper >= pair[1].upper)
        {
            return Err(ConfigError::InvalidRange(context));
        }
        Ok(())
    }

    /// Every label in classification order, ceiling last
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.bands
            .iter()
            .map(|band| &band.label)
            .chain(iter::once(&self.ceiling))
    }
}
