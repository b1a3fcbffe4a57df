use crate::error::ApiResult;
use crate::food::prompts::{classifier_system_prompt, classifier_user_prompt};
use crate::food::types::ClassificationResult;
use crate::llm::chat_json;
use crate::providers::traits::ChatProvider;

/// Split grocery items into food and non-food lists using the model.
///
/// The lists are passed through as the model returned them; absent keys
/// come back as empty lists.
pub async fn classify_items<P>(provider: &P, items: &[String]) -> ApiResult<ClassificationResult>
where
    P: ChatProvider + ?Sized,
{
    log::info!("Classifying {} grocery items", items.len());

    let result: ClassificationResult =
        chat_json(provider, &classifier_system_prompt(), &classifier_user_prompt(items)).await?;

    log::info!(
        "Classified {} food and {} non-food items",
        result.food_items.len(),
        result.non_food_items.len()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::providers::FakeProvider;

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_classify_items() {
        let provider = FakeProvider::new().with_reply(
            r#"{"food_items": ["chicken", "rice"], "non_food_items": ["dish soap"]}"#,
        );

        let result = classify_items(&provider, &items(&["chicken", "rice", "dish soap"]))
            .await
            .unwrap();

        assert_eq!(result.food_items, items(&["chicken", "rice"]));
        assert_eq!(result.non_food_items, items(&["dish soap"]));

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].user_prompt.contains("chicken, rice, dish soap"));
        assert!(calls[0].system_prompt.contains("classifying grocery items"));
    }

    #[tokio::test]
    async fn test_missing_keys_default_to_empty() {
        let provider = FakeProvider::new().with_reply("```json\n{\"food_items\": [\"milk\"]}\n```");
        let result = classify_items(&provider, &items(&["milk"])).await.unwrap();
        assert_eq!(result.food_items, items(&["milk"]));
        assert!(result.non_food_items.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_reply() {
        let provider = FakeProvider::new().with_reply("I cannot help with that.");
        let result = classify_items(&provider, &items(&["milk"])).await;
        assert!(matches!(result, Err(ApiError::MalformedResponse)));
    }
}
