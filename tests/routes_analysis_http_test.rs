// ABOUTME: HTTP integration tests for the recipe analyzer routes
// ABOUTME: Exercises health, analyze, ingredient catalog, validation errors, and middleware behavior
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for the full router
//!
//! Requests go through the same middleware stack the server uses, without
//! binding a socket.

mod common;
mod helpers;

use axum::http::StatusCode;
use axum::Router;
use helpers::axum_test::AxumTestRequest;
use recipe_analyzer::config::ServerConfig;
use recipe_analyzer::routes::{AnalyzeResponse, HealthResponse, IngredientsResponse};
use recipe_analyzer::{build_router, AppState, RecipeIntelligenceConfig};
use recipe_core::models::{DifficultyLevel, MealType};
use serde_json::{json, Value};
use std::sync::Arc;

fn app_with(config: &ServerConfig) -> Router {
    common::init_test_logging();
    let state = Arc::new(AppState::new(RecipeIntelligenceConfig::default()));
    build_router(config, state)
}

fn app() -> Router {
    app_with(&ServerConfig::default())
}

fn chicken_rice_body() -> Value {
    json!({
        "recipe_name": "Chicken Rice Bowl",
        "ingredients": ["200g chicken breast", "1 cup rice", "1 cup broccoli"],
        "steps": "Cook the rice.\nGrill the chicken for 10 minutes.\nSteam the broccoli and serve."
    })
}

// ============================================================================
// GET /api/health
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let response = AxumTestRequest::get("/api/health").send(app()).await;

    assert_eq!(response.status(), 200);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "success");
    assert_eq!(body.message, "Cooking Recipe Analyzer API is running");
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    assert!(!body.timestamp.is_empty());
}

// ============================================================================
// POST /api/analyze
// ============================================================================

#[tokio::test]
async fn test_analyze_success() {
    let response = AxumTestRequest::post("/api/analyze")
        .json(&chicken_rice_body())
        .send(app())
        .await
        .assert_status(StatusCode::OK);

    let body: AnalyzeResponse = response.json();
    assert_eq!(body.status, "success");
    assert_eq!(body.recipe_name, "Chicken Rice Bowl");
    assert_eq!(body.analysis.calories.total, 401);
    assert_eq!(body.analysis.calories.breakdown.len(), 3);
    assert_eq!(body.analysis.difficulty.level, DifficultyLevel::Easy);
    assert_eq!(body.analysis.difficulty.stats.steps, 3);
    assert_eq!(body.analysis.time.methods, vec!["grill", "steam"]);
    assert_eq!(body.analysis.suggestions.meal_type, MealType::MainCourse);
}

#[tokio::test]
async fn test_analyze_json_field_names() {
    let response = AxumTestRequest::post("/api/analyze")
        .json(&chicken_rice_body())
        .send(app())
        .await;

    let body: Value = response.json();
    let analysis = &body["analysis"];
    assert!(analysis["calories"]["per_serving"].is_u64());
    assert_eq!(analysis["difficulty"]["level"], "Easy");
    assert_eq!(analysis["time"]["display"], "50 minutes");
    assert_eq!(analysis["time"]["category"], "Moderate");
    assert_eq!(
        analysis["suggestions"]["diet_type"],
        "Non-Vegetarian (Gluten-Free)"
    );
    assert_eq!(analysis["suggestions"]["meal_type"], "Main Course");
}

#[tokio::test]
async fn test_analyze_defaults_recipe_name() {
    let response = AxumTestRequest::post("/api/analyze")
        .json(&json!({
            "ingredients": ["1 banana"],
            "steps": "Peel and eat."
        }))
        .send(app())
        .await
        .assert_status(StatusCode::OK);

    let body: AnalyzeResponse = response.json();
    assert_eq!(body.recipe_name, "Untitled Recipe");
}

#[tokio::test]
async fn test_analyze_missing_body() {
    let response = AxumTestRequest::post("/api/analyze").send(app()).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "No data provided");
}

#[tokio::test]
async fn test_analyze_invalid_json() {
    let response = AxumTestRequest::post("/api/analyze")
        .header("content-type", "application/json")
        .raw_body("{ not json")
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "No data provided");
}

#[tokio::test]
async fn test_analyze_empty_object() {
    let response = AxumTestRequest::post("/api/analyze")
        .json(&json!({}))
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "No data provided");
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_analyze_blank_ingredients() {
    let response = AxumTestRequest::post("/api/analyze")
        .json(&json!({
            "recipe_name": "Air",
            "ingredients": ["", "   "],
            "steps": "Breathe."
        }))
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "Please provide at least one ingredient");
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn test_analyze_blank_steps() {
    let response = AxumTestRequest::post("/api/analyze")
        .json(&json!({
            "ingredients": ["1 cup rice"],
            "steps": "  \n "
        }))
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "Please provide cooking steps");
}

#[tokio::test]
async fn test_analyze_wrong_method() {
    let response = AxumTestRequest::get("/api/analyze").send(app()).await;
    assert_eq!(response.status(), 405);
}

#[tokio::test]
async fn test_validation_error_carries_request_id() {
    let response = AxumTestRequest::post("/api/analyze")
        .header("x-request-id", "recipe-test-42")
        .json(&json!({}))
        .send(app())
        .await;

    assert_eq!(response.status(), 400);
    assert_eq!(
        response.header("x-request-id").as_deref(),
        Some("recipe-test-42")
    );
    let body: Value = response.json();
    assert_eq!(body["error"]["request_id"], "recipe-test-42");
}

#[tokio::test]
async fn test_request_id_generated_when_absent() {
    let response = AxumTestRequest::get("/api/health").send(app()).await;

    let request_id = response.header("x-request-id");
    assert!(request_id.is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let config = ServerConfig {
        max_request_body_bytes: 64,
        ..ServerConfig::default()
    };
    let body = chicken_rice_body().to_string();

    let response = AxumTestRequest::post("/api/analyze")
        .header("content-type", "application/json")
        .header("content-length", &body.len().to_string())
        .raw_body(&body)
        .send(app_with(&config))
        .await;

    assert_eq!(response.status(), 413);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Request body is too large");
    assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_body_within_limit_accepted() {
    let body = chicken_rice_body().to_string();
    let config = ServerConfig {
        max_request_body_bytes: body.len(),
        ..ServerConfig::default()
    };

    let response = AxumTestRequest::post("/api/analyze")
        .header("content-type", "application/json")
        .raw_body(&body)
        .send(app_with(&config))
        .await;

    assert_eq!(response.status(), 200);
}

// ============================================================================
// GET /api/ingredients
// ============================================================================

#[tokio::test]
async fn test_ingredients_catalog() {
    let response = AxumTestRequest::get("/api/ingredients")
        .send(app())
        .await
        .assert_status(StatusCode::OK);

    let body: IngredientsResponse = response.json();
    assert_eq!(body.status, "success");
    assert_eq!(body.catalog.count, body.catalog.ingredients.len());
    assert!(body.catalog.ingredients.contains(&"chicken breast".to_owned()));
}

// ============================================================================
// Fallback and CORS
// ============================================================================

#[tokio::test]
async fn test_unknown_route_not_found() {
    let response = AxumTestRequest::get("/api/recipes").send(app()).await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body["message"], "Route /api/recipes not found");
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_cors_preflight_allowed() {
    let response = AxumTestRequest::options("/api/analyze")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send(app())
        .await;

    assert_eq!(response.status(), 200);
    assert!(response.header("access-control-allow-origin").is_some());
}
