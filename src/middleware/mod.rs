// ABOUTME: HTTP middleware for the recipe analyzer service
// ABOUTME: CORS policy and the request-id header shared by tracing and error envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Cross-origin resource sharing configuration
pub mod cors;

use http::HeaderMap;

pub use cors::setup_cors;

/// Header carrying the per-request identifier
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request identifier assigned by the request-id layer, if present
#[must_use]
pub fn request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
