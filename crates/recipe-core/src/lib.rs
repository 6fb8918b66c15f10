// ABOUTME: Core types and constants for the recipe analyzer platform
// ABOUTME: Foundation crate with error handling, analysis models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe
//! analyzer. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP error envelopes
//! - **models**: Analysis result models shared by the intelligence engine and the HTTP layer
//! - **constants**: Service names, defaults, and validation messages

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Analysis models (difficulty levels, time categories, response structure)
pub mod models;

/// Application constants organized by domain
pub mod constants;

pub use errors::{AppError, AppResult, ErrorCode};
