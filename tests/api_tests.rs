use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use grocery_recipe_agent::api::create_api;
use grocery_recipe_agent::error::{ApiError, ErrorBody};
use grocery_recipe_agent::food::SuggestionResponse;
use grocery_recipe_agent::providers::FakeProvider;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const CLASSIFICATION: &str =
    r#"{"food_items": ["chicken", "rice"], "non_food_items": ["dish soap"]}"#;

const ONE_RECIPE: &str = r#"Sure, here is a recipe:
{
  "recipes": [
    {
      "name": "Chicken and Rice",
      "ingredients": [
        {"name": "chicken", "quantity": "2 breasts"},
        {"name": "rice", "quantity": "1 cup"}
      ],
      "instructions": ["Cook rice.", "Grill chicken.", "Serve together."],
      "missing_ingredients": ["salt"]
    }
  ],
  "additional_ingredients": ["salt"]
}"#;

async fn post_json(provider: Arc<FakeProvider>, uri: &str, body: Value) -> (StatusCode, Value) {
    let app = create_api(provider);
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_suggest_recipes_end_to_end() {
    let provider = Arc::new(FakeProvider::new().with_reply(CLASSIFICATION).with_reply(ONE_RECIPE));

    let (status, body) = post_json(
        provider.clone(),
        "/suggest-recipes",
        json!({"items": ["chicken", "rice", "dish soap"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: SuggestionResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.filtered_food_items, vec!["chicken", "rice"]);
    assert_eq!(response.non_food_items, vec!["dish soap"]);
    assert_eq!(response.recipes.len(), 1);
    assert_eq!(response.recipes[0].instructions.len(), 3);
    assert_eq!(response.additional_ingredients, vec!["salt"]);

    // Classification first, then recipes from the food subset only.
    let calls = provider.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].user_prompt.contains("chicken, rice, dish soap"));
    assert!(calls[1].user_prompt.contains("chicken, rice"));
    assert!(!calls[1].user_prompt.contains("dish soap"));
}

#[tokio::test]
async fn test_food_and_non_food_partition_input() {
    let provider = Arc::new(FakeProvider::new().with_reply(CLASSIFICATION).with_reply(ONE_RECIPE));
    let items = vec!["chicken", "rice", "dish soap"];

    let (_, body) = post_json(provider, "/suggest-recipes", json!({ "items": items })).await;
    let response: SuggestionResponse = serde_json::from_value(body).unwrap();

    let mut all: Vec<String> = response
        .filtered_food_items
        .iter()
        .chain(response.non_food_items.iter())
        .cloned()
        .collect();
    all.sort();
    let mut expected: Vec<String> = items.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(all, expected);
    assert!(response
        .filtered_food_items
        .iter()
        .all(|item| !response.non_food_items.contains(item)));
}

#[tokio::test]
async fn test_no_food_items_is_client_error() {
    let provider = Arc::new(
        FakeProvider::new().with_reply(r#"{"food_items": [], "non_food_items": ["dish soap"]}"#),
    );

    let (status, body) =
        post_json(provider.clone(), "/suggest-recipes", json!({"items": ["dish soap"]})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = serde_json::from_value(body).unwrap();
    assert_eq!(error.detail, "No food-related items found.");
    // The recipe call is never made.
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_classification_without_food_key_is_client_error() {
    let provider = Arc::new(FakeProvider::new().with_reply(r#"{"non_food_items": ["bleach"]}"#));

    let (status, _) =
        post_json(provider.clone(), "/suggest-recipes", json!({"items": ["bleach"]})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_null_food_items_is_client_error() {
    let provider = Arc::new(
        FakeProvider::new().with_reply(r#"{"food_items": null, "non_food_items": ["dish soap"]}"#),
    );

    let (status, body) =
        post_json(provider.clone(), "/suggest-recipes", json!({"items": ["dish soap"]})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "No food-related items found.");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_loosely_shaped_recipe_reply_is_accepted() {
    let recipe_reply = r#"{
  "recipes": [
    {
      "name": "Chicken and Rice",
      "ingredients": ["chicken", "rice"],
      "instructions": "Cook everything together.",
      "missing_ingredients": null
    }
  ],
  "additional_ingredients": null
}"#;
    let provider = Arc::new(
        FakeProvider::new()
            .with_reply(CLASSIFICATION)
            .with_reply(recipe_reply),
    );

    let (status, body) = post_json(
        provider,
        "/suggest-recipes",
        json!({"items": ["chicken", "rice", "dish soap"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: SuggestionResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.recipes.len(), 1);
    assert_eq!(response.recipes[0].ingredients[0].name, "chicken");
    assert!(response.recipes[0].missing_ingredients.is_empty());
    assert!(response.additional_ingredients.is_empty());
}

#[tokio::test]
async fn test_upstream_status_is_propagated() {
    let provider = Arc::new(FakeProvider::new().with_error(ApiError::Upstream {
        status: 401,
        body: "invalid api key".to_string(),
    }));

    let (status, body) = post_json(provider, "/suggest-recipes", json!({"items": ["milk"]})).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Groq API Error: invalid api key");
}

#[tokio::test]
async fn test_recipe_step_failure_aborts_request() {
    let provider = Arc::new(
        FakeProvider::new()
            .with_reply(CLASSIFICATION)
            .with_error(ApiError::Timeout),
    );

    let (status, body) = post_json(
        provider.clone(),
        "/suggest-recipes",
        json!({"items": ["chicken", "rice", "dish soap"]}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Groq API request timed out.");
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn test_malformed_classification() {
    let provider = Arc::new(FakeProvider::new().with_reply("No idea, sorry."));

    let (status, body) = post_json(provider, "/suggest-recipes", json!({"items": ["milk"]})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Could not extract JSON from Groq API response.");
}

#[tokio::test]
async fn test_empty_item_list_rejected_without_model_call() {
    let provider = Arc::new(FakeProvider::new());

    let (status, _) = post_json(provider.clone(), "/suggest-recipes", json!({"items": []})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) =
        post_json(provider.clone(), "/suggest-recipes", json!({"items": ["  ", ""]})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let provider = Arc::new(FakeProvider::new());

    let (status, body) = post_json(
        provider.clone(),
        "/suggest-recipes",
        json!({"groceries": ["milk"]}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_health_check() {
    let app = create_api(Arc::new(FakeProvider::new()));
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}
