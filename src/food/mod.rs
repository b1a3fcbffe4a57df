pub mod classifier;
pub mod prompts;
pub mod recipes;
pub mod types;

pub use classifier::classify_items;
pub use recipes::generate_recipes;
pub use types::{
    ClassificationResult, GroceryRequest, Recipe, RecipeIngredient, RecipeResult,
    SuggestionResponse,
};
