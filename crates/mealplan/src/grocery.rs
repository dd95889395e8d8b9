use std::collections::{HashMap, HashSet};

use nutriplan_catalog::Catalog;
use nutriplan_shared::mealplan::PlanMeal;
use serde::Serialize;

use crate::substitute;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroceryItem {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub amount_g: f64,
}

/// Sums ingredient grams of every meal by product.
///
/// Recipes are viewed through the user's current exclusions, so a stored
/// plan follows later profile changes. Meals whose recipe is gone from the
/// catalog or no longer resolves are skipped.
pub fn aggregate<'a>(
    meals: impl IntoIterator<Item = &'a PlanMeal>,
    catalog: &Catalog,
    excluded: &HashSet<String>,
) -> Vec<GroceryItem> {
    let mut amounts = HashMap::<String, f64>::new();

    for meal in meals {
        let Some(recipe) = catalog.recipe(&meal.recipe_id) else {
            tracing::warn!(recipe = %meal.recipe_id, date = %meal.date, "recipe missing from catalog");
            continue;
        };

        let Some(resolved) = substitute(recipe, excluded, catalog.products()) else {
            tracing::warn!(recipe = %meal.recipe_id, date = %meal.date, "recipe not resolvable");
            continue;
        };

        for ingredient in resolved.ingredients {
            *amounts.entry(ingredient.product_id).or_default() += ingredient.amount_g;
        }
    }

    let mut items = amounts
        .into_iter()
        .map(|(product_id, amount_g)| {
            let (name, category) = catalog
                .product(&product_id)
                .map(|p| (p.name.to_owned(), p.category.to_owned()))
                .unwrap_or_else(|| (product_id.to_owned(), String::new()));

            GroceryItem {
                product_id,
                name,
                category,
                amount_g,
            }
        })
        .collect::<Vec<_>>();

    items.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.product_id.cmp(&b.product_id))
    });

    items
}
