use crate::error::ApiResult;
use crate::food::prompts::{chef_system_prompt, recipe_user_prompt};
use crate::food::types::RecipeResult;
use crate::llm::chat_json;
use crate::providers::traits::ChatProvider;

/// Ask the model for recipes built around `food_items`.
///
/// An empty list short-circuits to an empty result without calling the model.
pub async fn generate_recipes<P>(provider: &P, food_items: &[String]) -> ApiResult<RecipeResult>
where
    P: ChatProvider + ?Sized,
{
    if food_items.is_empty() {
        return Ok(RecipeResult::default());
    }

    log::info!("Generating recipes from {} food items", food_items.len());

    let result: RecipeResult =
        chat_json(provider, &chef_system_prompt(), &recipe_user_prompt(food_items)).await?;

    log::info!(
        "Received {} recipes, {} additional ingredients",
        result.recipes.len(),
        result.additional_ingredients.len()
    );
    Ok(result)
}
