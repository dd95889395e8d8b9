use std::collections::HashMap;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use nutriplan_shared::{product::Product, recipe::Recipe};
use serde::Serialize;

/// Nutrition totals of an ingredient, a recipe or a whole day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Macro {
    pub kcal: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub fiber: f64,
}

impl Macro {
    pub fn scale(self, factor: f64) -> Self {
        Self {
            kcal: self.kcal * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
            carbs: self.carbs * factor,
            fiber: self.fiber * factor,
        }
    }
}

impl Add for Macro {
    type Output = Macro;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            kcal: self.kcal + rhs.kcal,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbs: self.carbs + rhs.carbs,
            fiber: self.fiber + rhs.fiber,
        }
    }
}

impl AddAssign for Macro {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Macro {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macro::default(), Add::add)
    }
}

impl<'a> Sum<&'a Macro> for Macro {
    fn sum<I: Iterator<Item = &'a Macro>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Macros of `amount_g` grams of `product`.
pub fn ingredient_macro(amount_g: f64, product: &Product) -> Macro {
    Macro {
        kcal: product.kcal_per_100g,
        protein: product.protein_per_100g,
        fat: product.fat_per_100g,
        carbs: product.carbs_per_100g,
        fiber: product.fiber_per_100g,
    }
    .scale(amount_g / 100.0)
}

/// Sum of every ingredient of `recipe`. Ingredients must already point to
/// products of `products`; unknown ones count as zero.
pub fn recipe_macro(recipe: &Recipe, products: &HashMap<String, Product>) -> Macro {
    recipe
        .ingredients
        .iter()
        .filter_map(|ingredient| match products.get(&ingredient.product_id) {
            Some(product) => Some(ingredient_macro(ingredient.amount_g, product)),
            None => {
                tracing::warn!(
                    recipe = %recipe.id,
                    product = %ingredient.product_id,
                    "ingredient product missing from catalog"
                );
                None
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use nutriplan_shared::recipe::{MealType, RecipeIngredient};

    use super::*;

    fn product(id: &str, kcal: f64, protein: f64, fat: f64, carbs: f64, fiber: f64) -> Product {
        Product {
            id: id.to_owned(),
            name: id.to_owned(),
            category: "test".to_owned(),
            kcal_per_100g: kcal,
            protein_per_100g: protein,
            fat_per_100g: fat,
            carbs_per_100g: carbs,
            fiber_per_100g: fiber,
            allowed_substitutes: vec![],
        }
    }

    fn egg_bowl() -> Recipe {
        Recipe {
            id: "r1".to_owned(),
            name: "Egg Bowl".to_owned(),
            description: String::new(),
            meal_type: MealType::Breakfast,
            tags: vec![],
            instructions: vec![],
            ingredients: vec![
                RecipeIngredient {
                    product_id: "egg".to_owned(),
                    amount_g: 100.0,
                },
                RecipeIngredient {
                    product_id: "rice".to_owned(),
                    amount_g: 150.0,
                },
            ],
        }
    }

    fn products() -> HashMap<String, Product> {
        [
            product("egg", 155.0, 13.0, 11.0, 1.0, 0.0),
            product("rice", 130.0, 2.7, 0.3, 28.0, 0.4),
        ]
        .into_iter()
        .map(|p| (p.id.to_owned(), p))
        .collect()
    }

    #[test]
    fn test_recipe_macro_sums_ingredients() {
        let total = recipe_macro(&egg_bowl(), &products());

        assert!((total.kcal - 350.0).abs() < 1e-9);
        assert!((total.protein - 17.05).abs() < 1e-9);
        assert!((total.fat - 11.45).abs() < 1e-9);
        assert!((total.carbs - 43.0).abs() < 1e-9);
        assert!((total.fiber - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_ingredient_macro_is_linear() {
        let oats = product("oats", 389.0, 16.9, 6.9, 66.3, 10.6);
        let base = ingredient_macro(100.0, &oats);

        assert_eq!(base.kcal, 389.0);
        assert_eq!(ingredient_macro(200.0, &oats), base.scale(2.0));
        assert_eq!(ingredient_macro(50.0, &oats), base.scale(0.5));
        assert_eq!(ingredient_macro(0.0, &oats), Macro::default());
    }

    #[test]
    fn test_empty_recipe_is_zero() {
        let mut recipe = egg_bowl();
        recipe.ingredients.clear();

        assert_eq!(recipe_macro(&recipe, &products()), Macro::default());
    }

    #[test]
    fn test_unknown_product_counts_as_zero() {
        let mut products = products();
        products.remove("rice");
        let total = recipe_macro(&egg_bowl(), &products);

        assert_eq!(total.kcal, 155.0);
    }

    #[test]
    fn test_sum_of_macros() {
        let a = Macro {
            kcal: 100.0,
            protein: 10.0,
            ..Default::default()
        };
        let total: Macro = [a, a, a].iter().sum();

        assert_eq!(total.kcal, 300.0);
        assert_eq!(total.protein, 30.0);
        assert_eq!(total.fat, 0.0);
    }
}
