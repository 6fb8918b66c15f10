// ABOUTME: Environment configuration management for the recipe analyzer HTTP service
// ABOUTME: Parses listen address, CORS origins, request limits, and timeouts from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management for deployment

use anyhow::{anyhow, Result};
use recipe_core::constants::defaults;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// HTTP service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub http_host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Allowed CORS origins, `["*"]` for any
    pub cors_origins: Vec<String>,
    /// Largest accepted request body in bytes
    pub max_request_body_bytes: usize,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: defaults::HTTP_HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            cors_origins: vec!["*".to_owned()],
            max_request_body_bytes: defaults::MAX_REQUEST_BODY_BYTES,
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        Ok(Self {
            http_host: env_var_or("HTTP_HOST", defaults::HTTP_HOST),
            http_port: env_parse_or("HTTP_PORT", defaults::HTTP_PORT)?,
            cors_origins: parse_origins(&env_var_or("CORS_ALLOWED_ORIGINS", "*")),
            max_request_body_bytes: env_parse_or(
                "MAX_REQUEST_BODY_BYTES",
                defaults::MAX_REQUEST_BODY_BYTES,
            )?,
            request_timeout_secs: env_parse_or(
                "REQUEST_TIMEOUT_SECS",
                defaults::REQUEST_TIMEOUT_SECS,
            )?,
        })
    }

    /// `host:port` to bind the listener to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// Request timeout as a duration
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Whether every origin is allowed
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe analyzer config: bind={} cors_origins={} max_body={}B timeout={}s",
            self.bind_address(),
            self.cors_origins.join(","),
            self.max_request_body_bytes,
            self.request_timeout_secs
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn env_parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    env::var(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid {key} value '{value}': {e}"))
    })
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
