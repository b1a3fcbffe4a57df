use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GroceryRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "items must contain between 1 and 100 entries"
    ))]
    pub items: Vec<String>,
}

impl GroceryRequest {
    /// Trimmed item names with blank entries removed, order preserved.
    pub fn cleaned_items(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub food_items: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub non_food_items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub quantity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "ingredients")]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default, deserialize_with = "steps")]
    pub instructions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub missing_ingredients: Vec<String>,
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub servings: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub prep_time: Option<String>,
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub cook_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recipes: Vec<Recipe>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub additional_ingredients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub filtered_food_items: Vec<String>,
    pub non_food_items: Vec<String>,
    pub recipes: Vec<Recipe>,
    pub additional_ingredients: Vec<String>,
}

impl SuggestionResponse {
    pub fn new(classification: ClassificationResult, recipes: RecipeResult) -> Self {
        Self {
            filtered_food_items: classification.food_items,
            non_food_items: classification.non_food_items,
            recipes: recipes.recipes,
            additional_ingredients: recipes.additional_ingredients,
        }
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?))
}

// An explicit `null` reads the same as an absent key.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// Bare strings are ingredient names without a quantity.
fn ingredients<'de, D>(deserializer: D) -> Result<Vec<RecipeIngredient>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => {
            return Err(serde::de::Error::custom(format!(
                "ingredients must be a list, got {}",
                other
            )))
        }
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Null => None,
            Value::String(name) => Some(Ok(RecipeIngredient {
                name,
                quantity: String::new(),
            })),
            other => Some(
                serde_json::from_value(other).map_err(<D::Error as serde::de::Error>::custom),
            ),
        })
        .collect()
}

// A lone instruction string becomes a single step.
fn steps<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::String(s) if s.trim().is_empty() => Ok(Vec::new()),
        Value::String(s) => Ok(vec![s]),
        Value::Array(items) => Ok(items.into_iter().filter_map(scalar_to_string).collect()),
        other => Err(serde::de::Error::custom(format!(
            "instructions must be a string or a list of steps, got {}",
            other
        ))),
    }
}
