use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Daily targets and exclusions a plan is generated against.
#[derive(Validate, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[validate(range(min = 1))]
    pub calorie_target: u32,
    #[validate(range(min = 1))]
    pub protein_target: u32,
    #[serde(default)]
    pub excluded_products: HashSet<String>,
}

impl Profile {
    pub fn is_excluded(&self, product_id: &str) -> bool {
        self.excluded_products.contains(product_id)
    }
}
