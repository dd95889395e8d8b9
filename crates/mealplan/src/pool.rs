use std::collections::{HashMap, HashSet};

use nutriplan_shared::{
    product::Product,
    recipe::{MealType, Recipe},
};
use strum::VariantArray;

use crate::{GenerateError, Macro, recipe_macro, substitute};

/// A recipe resolved against the user's exclusions, with its macros.
#[derive(Clone, Debug, PartialEq)]
pub struct PoolEntry {
    pub recipe: Recipe,
    pub macros: Macro,
}

/// Feasible recipes grouped by meal type. Always holds one pool per variant.
#[derive(Clone, Debug)]
pub struct MealPools {
    pools: HashMap<MealType, Vec<PoolEntry>>,
}

impl MealPools {
    pub fn build<'a>(
        recipes: impl IntoIterator<Item = &'a Recipe>,
        excluded: &HashSet<String>,
        products: &HashMap<String, Product>,
    ) -> Self {
        let mut pools = MealType::VARIANTS
            .iter()
            .map(|meal_type| (*meal_type, Vec::new()))
            .collect::<HashMap<_, _>>();

        let mut skipped = 0;
        for recipe in recipes {
            let Some(resolved) = substitute(recipe, excluded, products) else {
                skipped += 1;
                continue;
            };

            let macros = recipe_macro(&resolved, products);
            pools
                .entry(resolved.meal_type)
                .or_default()
                .push(PoolEntry {
                    recipe: resolved,
                    macros,
                });
        }

        if skipped > 0 {
            tracing::debug!(skipped, "recipes dropped, no substitute for excluded products");
        }

        Self { pools }
    }

    pub fn get(&self, meal_type: MealType) -> &[PoolEntry] {
        self.pools
            .get(&meal_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Fails on the first empty pool, in breakfast, lunch, dinner, snack order.
    pub fn ensure_complete(&self) -> Result<(), GenerateError> {
        match MealType::VARIANTS
            .iter()
            .find(|meal_type| self.get(**meal_type).is_empty())
        {
            Some(meal_type) => Err(GenerateError::EmptyMealPool(*meal_type)),
            None => Ok(()),
        }
    }

    /// Number of feasible recipes across all pools.
    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
