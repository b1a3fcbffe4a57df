pub const RECIPE_COUNT: usize = 3;

const CLASSIFICATION_SCHEMA: &str = r#"{
  "food_items": ["food1", "food2"],
  "non_food_items": ["nonfood1", "nonfood2"]
}"#;

pub fn classifier_system_prompt() -> String {
    format!(
        "You are an expert in classifying grocery items. \
         You always answer with a single JSON object and no extra text, \
         in exactly this format:\n{}\n\
         Every input item must appear in exactly one of the two lists, spelled as given.",
        CLASSIFICATION_SCHEMA
    )
}

pub fn classifier_user_prompt(items: &[String]) -> String {
    format!(
        "Classify these grocery items into food-related and non-food items: {}.\n\n\
         Rules:\n\
         - Food-related: edible ingredients, cooking essentials.\n\
         - Non-food: household items, medicines, toiletries.\n\n\
         Output JSON only.",
        items.join(", ")
    )
}

const RECIPE_SCHEMA: &str = r#"{
  "recipes": [
    {
      "name": "Recipe 1",
      "ingredients": [
        {"name": "ingredient_1", "quantity": "X unit"},
        {"name": "ingredient_2", "quantity": "Y unit"}
      ],
      "instructions": ["Step 1 ...", "Step 2 ..."],
      "missing_ingredients": ["ingredient_x"],
      "servings": "2",
      "prep_time": "10 minutes",
      "cook_time": "20 minutes"
    }
  ],
  "additional_ingredients": ["ingredient_x", "ingredient_y"]
}"#;

pub fn chef_system_prompt() -> String {
    format!(
        "You are an expert chef providing detailed recipes. \
         You always answer with a single JSON object and no extra text, \
         in exactly this format:\n{}",
        RECIPE_SCHEMA
    )
}

pub fn recipe_user_prompt(food_items: &[String]) -> String {
    format!(
        "Generate exactly {} recipes using these ingredients: {}.\n\n\
         Each recipe must have:\n\
         - Name\n\
         - Ingredients with quantity\n\
         - Cooking instructions as an ordered list of steps\n\
         - Missing ingredients (anything the recipe needs that is not in the list above)\n\
         - Estimated servings, preparation time and cooking time\n\n\
         List every missing ingredient across all recipes in additional_ingredients. \
         Output JSON only.",
        RECIPE_COUNT,
        food_items.join(", ")
    )
}
