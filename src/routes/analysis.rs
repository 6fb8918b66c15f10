// ABOUTME: Recipe analysis route handlers for the analyze and ingredient catalog endpoints
// ABOUTME: Validates recipe requests, runs the analysis pipeline, and shapes JSON responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recipe analysis routes
//!
//! Input validation happens here; the analysis pipeline itself is total and
//! only ever sees a recipe with at least one ingredient and non-blank steps.

use crate::logging::AppLogger;
use crate::middleware::request_id;
use crate::server::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use recipe_core::constants::{messages, status};
use recipe_core::models::{IngredientCatalog, RecipeAnalysis, RecipeInput};
use recipe_core::{AppError, AppResult};
use recipe_intelligence::RecipeAnalyzer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::task;

/// Body of `POST /api/analyze`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Optional display name
    pub recipe_name: Option<String>,
    /// Ingredient lines
    pub ingredients: Option<Vec<String>>,
    /// Free-text steps
    pub steps: Option<String>,
}

impl AnalyzeRequest {
    /// Validate the request into a recipe the pipeline accepts
    ///
    /// # Errors
    ///
    /// Returns a 400-class `AppError` when the body is empty, has no non-blank
    /// ingredient, or has blank steps
    pub fn into_recipe(self) -> AppResult<RecipeInput> {
        if self.recipe_name.is_none() && self.ingredients.is_none() && self.steps.is_none() {
            return Err(AppError::invalid_input(messages::NO_DATA));
        }

        let steps = self.steps.unwrap_or_default();
        let recipe = RecipeInput::new(
            self.recipe_name.as_deref(),
            self.ingredients.unwrap_or_default(),
            steps.trim(),
        );

        if recipe.ingredients.is_empty() {
            return Err(AppError::missing_field(messages::NO_INGREDIENTS));
        }
        if recipe.steps.is_empty() {
            return Err(AppError::missing_field(messages::NO_STEPS));
        }

        Ok(recipe)
    }
}

/// Body of a successful `POST /api/analyze`
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Always `"success"`
    pub status: String,
    /// Name used for the analysis
    pub recipe_name: String,
    /// Nested analysis
    pub analysis: RecipeAnalysis,
}

/// Body of `GET /api/ingredients`
#[derive(Debug, Serialize, Deserialize)]
pub struct IngredientsResponse {
    /// Always `"success"`
    pub status: String,
    /// Known calorie table keys and their count
    #[serde(flatten)]
    pub catalog: IngredientCatalog,
}

/// Recipe analysis routes
pub struct AnalysisRoutes;

impl AnalysisRoutes {
    /// Create the analysis and ingredient catalog routes
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/api/analyze", post(Self::handle_analyze))
            .route("/api/ingredients", get(Self::handle_ingredients))
            .with_state(state)
    }

    /// Handle recipe analysis
    async fn handle_analyze(
        State(state): State<Arc<AppState>>,
        headers: HeaderMap,
        payload: Result<Json<AnalyzeRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let with_request_id = |error: AppError| match request_id(&headers) {
            Some(id) => error.with_request_id(id),
            None => error,
        };

        let recipe = payload
            .map(|Json(request)| request)
            .map_err(|rejection| rejection_error(&rejection))
            .and_then(AnalyzeRequest::into_recipe)
            .map_err(|error| {
                AppLogger::log_validation_failure("/api/analyze", &error.message);
                with_request_id(error)
            })?;

        let started = Instant::now();
        let (recipe, analysis) = task::spawn_blocking(move || {
            let analysis = RecipeAnalyzer::with_config(&state.intelligence).analyze(&recipe);
            (recipe, analysis)
        })
        .await
        .map_err(|e| with_request_id(AppError::internal(format!("Analysis task failed: {e}"))))?;

        AppLogger::log_recipe_analysis(
            &recipe.recipe_name,
            recipe.ingredients.len(),
            analysis.difficulty.level.as_str(),
            started.elapsed().as_millis() as u64,
        );

        let response = AnalyzeResponse {
            status: status::SUCCESS.to_owned(),
            recipe_name: recipe.recipe_name,
            analysis,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle ingredient catalog listing
    async fn handle_ingredients(State(state): State<Arc<AppState>>) -> Json<IngredientsResponse> {
        let catalog = RecipeAnalyzer::with_config(&state.intelligence).known_ingredients();

        Json(IngredientsResponse {
            status: status::SUCCESS.to_owned(),
            catalog,
        })
    }
}

/// Map a JSON extractor rejection onto the error envelope
///
/// Oversized bodies keep their 413; every other rejection is "No data provided".
fn rejection_error(rejection: &JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(messages::BODY_TOO_LARGE)
    } else {
        AppError::invalid_input(messages::NO_DATA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_is_no_data() {
        let result = AnalyzeRequest::default().into_recipe();
        assert!(matches!(result, Err(e) if e.message == messages::NO_DATA));
    }

    #[test]
    fn test_blank_ingredients_rejected_before_steps() {
        let request = AnalyzeRequest {
            recipe_name: None,
            ingredients: Some(vec!["  ".to_owned(), String::new()]),
            steps: None,
        };
        assert!(matches!(request.into_recipe(), Err(e) if e.message == messages::NO_INGREDIENTS));
    }

    #[test]
    fn test_blank_steps_rejected() {
        let request = AnalyzeRequest {
            recipe_name: Some("Toast".to_owned()),
            ingredients: Some(vec!["bread".to_owned()]),
            steps: Some(" \n ".to_owned()),
        };
        assert!(matches!(request.into_recipe(), Err(e) if e.message == messages::NO_STEPS));
    }
}
