// ABOUTME: Application-wide constants for the recipe analyzer
// ABOUTME: Service identity, request defaults, and user-facing validation messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants organized by domain

/// Service identity used in logs and health responses
pub mod service_names {
    /// Name of the HTTP service
    pub const RECIPE_ANALYZER_SERVER: &str = "recipe-analyzer-server";
    /// Human readable product name
    pub const PRODUCT_NAME: &str = "Cooking Recipe Analyzer";
}

/// Defaults applied to incoming requests
pub mod defaults {
    /// Name used when a request omits `recipe_name` or leaves it blank
    pub const RECIPE_NAME: &str = "Untitled Recipe";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 5005;
    /// Default bind address
    pub const HTTP_HOST: &str = "0.0.0.0";
    /// Default maximum request body size (64 KiB)
    pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
    /// Default request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Messages returned to callers when input validation fails
pub mod messages {
    /// Request body missing or not valid JSON
    pub const NO_DATA: &str = "No data provided";
    /// Ingredient list empty after trimming
    pub const NO_INGREDIENTS: &str = "Please provide at least one ingredient";
    /// Steps missing or whitespace only
    pub const NO_STEPS: &str = "Please provide cooking steps";
    /// Request body over the configured size limit
    pub const BODY_TOO_LARGE: &str = "Request body is too large";
    /// Health endpoint message
    pub const HEALTHY: &str = "Cooking Recipe Analyzer API is running";
}

/// Response status markers used in JSON envelopes
pub mod status {
    /// Successful response marker
    pub const SUCCESS: &str = "success";
    /// Error response marker
    pub const ERROR: &str = "error";
}
