use std::collections::{HashMap, HashSet};

use nutriplan_shared::{
    product::Product,
    recipe::{Recipe, RecipeIngredient},
};

/// Rewrites `recipe` so that no ingredient uses an excluded product.
///
/// Each excluded ingredient is replaced by the first entry of its product's
/// `allowed_substitutes` that is neither excluded nor missing from `products`.
/// The gram amount is kept. Returns `None` when an excluded product is unknown
/// or has no eligible substitute.
pub fn substitute(
    recipe: &Recipe,
    excluded: &HashSet<String>,
    products: &HashMap<String, Product>,
) -> Option<Recipe> {
    let mut ingredients = Vec::with_capacity(recipe.ingredients.len());

    for ingredient in &recipe.ingredients {
        if !excluded.contains(&ingredient.product_id) {
            ingredients.push(ingredient.clone());
            continue;
        }

        let product = products.get(&ingredient.product_id)?;
        let replacement = product
            .allowed_substitutes
            .iter()
            .find(|id| !excluded.contains(*id) && products.contains_key(*id))?;

        ingredients.push(RecipeIngredient {
            product_id: replacement.to_owned(),
            amount_g: ingredient.amount_g,
        });
    }

    Some(Recipe {
        ingredients,
        ..recipe.clone()
    })
}
