use nutriplan_shared::{
    product::Product,
    recipe::{MealType, Recipe, RecipeIngredient},
};
use serde::{Deserialize, Serialize};
use ulid::Ulid;
use validator::Validate;

/// Catalog file layout: `{ "products": [...], "recipes": [...] }`.
#[derive(Validate, Deserialize)]
pub struct ImportPayload {
    #[validate(nested)]
    pub products: Vec<ProductInput>,
    #[validate(nested)]
    pub recipes: Vec<RecipeInput>,
}

#[derive(Validate, Deserialize, Clone)]
pub struct ProductInput {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub kcal_per_100g: f64,
    #[validate(range(min = 0.0))]
    pub protein_per_100g: f64,
    #[validate(range(min = 0.0))]
    pub fat_per_100g: f64,
    #[validate(range(min = 0.0))]
    pub carbs_per_100g: f64,
    #[validate(range(min = 0.0))]
    pub fiber_per_100g: f64,
    #[serde(default)]
    pub allowed_substitutes: Vec<String>,
}

#[derive(Validate, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub meal_type: MealType,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[validate(length(min = 1), nested)]
    pub ingredients: Vec<IngredientInput>,
}

#[derive(Validate, Deserialize, Serialize, Clone)]
pub struct IngredientInput {
    #[serde(rename = "productId")]
    #[validate(length(min = 1))]
    pub product_id: String,
    #[validate(range(exclusive_min = 0.0))]
    pub amount_g: f64,
}

impl From<ProductInput> for Product {
    fn from(value: ProductInput) -> Self {
        Product {
            id: value.id,
            name: value.name,
            category: value.category,
            kcal_per_100g: value.kcal_per_100g,
            protein_per_100g: value.protein_per_100g,
            fat_per_100g: value.fat_per_100g,
            carbs_per_100g: value.carbs_per_100g,
            fiber_per_100g: value.fiber_per_100g,
            allowed_substitutes: value
                .allowed_substitutes
                .into_iter()
                .filter(|id| !id.is_empty())
                .collect(),
        }
    }
}

impl From<RecipeInput> for Recipe {
    fn from(value: RecipeInput) -> Self {
        Recipe {
            id: value
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| Ulid::new().to_string()),
            name: value.name,
            description: value.description,
            meal_type: value.meal_type,
            tags: value.tags,
            instructions: value.instructions,
            ingredients: value
                .ingredients
                .into_iter()
                .map(|i| RecipeIngredient {
                    product_id: i.product_id,
                    amount_g: i.amount_g,
                })
                .collect(),
        }
    }
}
