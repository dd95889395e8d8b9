mod import;

pub use import::*;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use nutriplan_shared::{
    product::Product,
    recipe::{MealType, Recipe},
};
use validator::Validate;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("duplicate product id `{0}`")]
    DuplicateProduct(String),

    #[error("duplicate recipe id `{0}`")]
    DuplicateRecipe(String),

    #[error("recipe `{recipe}` uses unknown product `{product}`")]
    UnknownProduct { recipe: String, product: String },
}

impl From<CatalogError> for nutriplan_shared::Error {
    fn from(value: CatalogError) -> Self {
        match value {
            CatalogError::Validate(errors) => Self::Validate(errors),
            CatalogError::Io(err) => Self::Unknown(err.into()),
            other => Self::User(other.to_string()),
        }
    }
}

/// Read-only snapshot of every product and recipe.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: HashMap<String, Product>,
    recipes: Vec<Recipe>,
    /// Position of each recipe id in `recipes`
    recipe_index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a snapshot without import validation.
    pub fn new(
        products: impl IntoIterator<Item = Product>,
        recipes: impl IntoIterator<Item = Recipe>,
    ) -> Self {
        let recipes = recipes.into_iter().collect::<Vec<_>>();
        let mut recipe_index = HashMap::with_capacity(recipes.len());
        for (position, recipe) in recipes.iter().enumerate() {
            recipe_index.entry(recipe.id.to_owned()).or_insert(position);
        }

        Self {
            products: products.into_iter().map(|p| (p.id.to_owned(), p)).collect(),
            recipes,
            recipe_index,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;

        tracing::info!(
            path = %path.display(),
            products = catalog.products.len(),
            recipes = catalog.recipes.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let payload: ImportPayload = serde_json::from_str(content)?;
        Self::import(payload)
    }

    pub fn import(payload: ImportPayload) -> Result<Self, CatalogError> {
        payload.validate()?;

        let mut products = HashMap::with_capacity(payload.products.len());
        for input in payload.products {
            if products.contains_key(&input.id) {
                return Err(CatalogError::DuplicateProduct(input.id));
            }
            products.insert(input.id.to_owned(), Product::from(input));
        }

        let mut recipe_index = HashMap::with_capacity(payload.recipes.len());
        let mut recipes = Vec::with_capacity(payload.recipes.len());
        for input in payload.recipes {
            let recipe = Recipe::from(input);
            if recipe_index.contains_key(&recipe.id) {
                return Err(CatalogError::DuplicateRecipe(recipe.id));
            }
            if let Some(missing) = recipe
                .ingredients
                .iter()
                .find(|i| !products.contains_key(&i.product_id))
            {
                return Err(CatalogError::UnknownProduct {
                    recipe: recipe.id.to_owned(),
                    product: missing.product_id.to_owned(),
                });
            }
            recipe_index.insert(recipe.id.to_owned(), recipes.len());
            recipes.push(recipe);
        }

        Ok(Self {
            products,
            recipes,
            recipe_index,
        })
    }

    /// All products ordered by id.
    pub fn list_products(&self) -> Vec<&Product> {
        let mut products = self.products.values().collect::<Vec<_>>();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        products
    }

    pub fn list_recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn products(&self) -> &HashMap<String, Product> {
        &self.products
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipe_index
            .get(id)
            .and_then(|position| self.recipes.get(*position))
    }

    pub fn count_by_meal_type(&self) -> BTreeMap<MealType, usize> {
        let mut counts = BTreeMap::new();
        for recipe in &self.recipes {
            *counts.entry(recipe.meal_type).or_default() += 1;
        }
        counts
    }
}
