use serde::{Deserialize, Serialize};

/// A catalog product with its nutrition values per 100 g.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub kcal_per_100g: f64,
    pub protein_per_100g: f64,
    pub fat_per_100g: f64,
    pub carbs_per_100g: f64,
    pub fiber_per_100g: f64,
    /// Ordered substitution candidates. Ids may point to products that are
    /// missing from the catalog; they are skipped when resolving.
    #[serde(default)]
    pub allowed_substitutes: Vec<String>,
}

