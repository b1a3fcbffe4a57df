use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::food::{classify_items, generate_recipes, GroceryRequest, SuggestionResponse};
use crate::providers::traits::ChatProvider;

#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn ChatProvider>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Create and configure the API router
pub fn create_api(provider: Arc<dyn ChatProvider>) -> Router {
    log::info!("Setting up API routes (model: {})", provider.get_model_info());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/suggest-recipes", post(suggest_recipes_handler))
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(AppState { provider })
}

async fn suggest_recipes_handler(
    State(state): State<AppState>,
    payload: Result<Json<GroceryRequest>, JsonRejection>,
) -> ApiResult<Json<SuggestionResponse>> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    request
        .validate()
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

    let items = request.cleaned_items();
    if items.is_empty() {
        return Err(ApiError::InvalidRequest(
            "items must contain at least one non-blank entry".to_string(),
        ));
    }

    suggest_recipes(state.provider.as_ref(), &items).await.map(Json)
}

/// Classify `items`, then generate recipes from the food subset.
///
/// The two model calls run one after the other; nothing is requested for
/// recipes when classification finds no food.
pub async fn suggest_recipes(
    provider: &dyn ChatProvider,
    items: &[String],
) -> ApiResult<SuggestionResponse> {
    let classification = classify_items(provider, items).await?;

    if classification.food_items.is_empty() {
        return Err(ApiError::NoFoodItems);
    }

    let recipes = generate_recipes(provider, &classification.food_items).await?;

    Ok(SuggestionResponse::new(classification, recipes))
}

async fn health_check() -> Json<HealthResponse> {
    log::debug!("Health check requested");
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
