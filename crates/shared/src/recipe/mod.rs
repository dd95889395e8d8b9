use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub product_id: String,
    pub amount_g: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub meal_type: MealType,
    pub tags: Vec<String>,
    pub instructions: Vec<String>,
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn uses_product(&self, product_id: &str) -> bool {
        self.ingredients.iter().any(|i| i.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::VariantArray;

    use super::*;

    #[test]
    fn test_meal_type_order_is_breakfast_lunch_dinner_snack() {
        assert_eq!(
            MealType::VARIANTS,
            &[
                MealType::Breakfast,
                MealType::Lunch,
                MealType::Dinner,
                MealType::Snack
            ]
        );
    }

    #[test]
    fn test_meal_type_parses_lowercase_and_rejects_unknown() {
        assert_eq!(MealType::from_str("snack").unwrap(), MealType::Snack);
        assert_eq!(MealType::Dinner.to_string(), "dinner");
        assert!(MealType::from_str("brunch").is_err());
        assert!(serde_json::from_str::<MealType>("\"supper\"").is_err());
        assert_eq!(
            serde_json::from_str::<MealType>("\"lunch\"").unwrap(),
            MealType::Lunch
        );
    }
}
