// ABOUTME: Configuration error types for recipe intelligence validation
// ABOUTME: Defines error variants for invalid ranges, duplicate keys, and load failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration error types for recipe intelligence validation.

use std::{env, io};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Band bounds or thresholds out of order (e.g., band uppers not increasing)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Scoring weights unusable (negative or not finite)
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Keyword table contains an empty or repeated key
    #[error("Duplicate or empty key in {table}: '{key}'")]
    DuplicateKey {
        /// Table the key belongs to
        table: &'static str,
        /// Offending key as configured
        key: String,
    },

    /// Failed to parse configuration value or document
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration file could not be read
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] io::Error),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),
}
