use std::{path::PathBuf, str::FromStr};

use chrono::NaiveDate;
use nutriplan_catalog::Catalog;
use nutriplan_mealplan::{GenerateInput, Picker};
use nutriplan_shared::{
    product::Product,
    recipe::{MealType, Recipe, RecipeIngredient},
};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::migrator::{Migrate, Plan};

#[allow(dead_code)]
pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    nutriplan_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

/// Picker driven by a closure of `(call index, pool len)`.
pub struct Scripted<F> {
    script: F,
    pub calls: usize,
}

impl<F: FnMut(usize, usize) -> usize> Scripted<F> {
    pub fn new(script: F) -> Self {
        Self { script, calls: 0 }
    }
}

impl<F: FnMut(usize, usize) -> usize> Picker for Scripted<F> {
    fn pick(&mut self, len: usize) -> usize {
        let index = (self.script)(self.calls, len);
        self.calls += 1;
        index
    }
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::from_str(value).unwrap()
}

pub fn input(start: &str, end: &str, calorie_target: u32, protein_target: u32) -> GenerateInput {
    GenerateInput {
        user_id: "john".to_owned(),
        start_date: date(start),
        end_date: date(end),
        calorie_target,
        protein_target,
    }
}

pub fn product(id: &str, kcal: f64, protein: f64, substitutes: &[&str]) -> Product {
    Product {
        id: id.to_owned(),
        name: id.to_owned(),
        category: "test".to_owned(),
        kcal_per_100g: kcal,
        protein_per_100g: protein,
        fat_per_100g: 5.0,
        carbs_per_100g: 20.0,
        fiber_per_100g: 2.0,
        allowed_substitutes: substitutes.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn recipe(id: &str, meal_type: MealType, ingredients: &[(&str, f64)]) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: id.to_owned(),
        description: String::new(),
        meal_type,
        tags: vec![],
        instructions: vec![],
        ingredients: ingredients
            .iter()
            .map(|(product_id, amount_g)| RecipeIngredient {
                product_id: product_id.to_string(),
                amount_g: *amount_g,
            })
            .collect(),
    }
}

/// One recipe per meal type, 100 g each, adding up to 2000 kcal and 140 g protein.
#[allow(dead_code)]
pub fn balanced_catalog() -> Catalog {
    Catalog::new(
        [
            product("egg", 500.0, 35.0, &[]),
            product("chicken", 600.0, 40.0, &["tofu"]),
            product("tofu", 600.0, 40.0, &[]),
            product("salmon", 600.0, 40.0, &[]),
            product("yogurt", 300.0, 25.0, &[]),
        ],
        [
            recipe("omelette", MealType::Breakfast, &[("egg", 100.0)]),
            recipe("chicken-salad", MealType::Lunch, &[("chicken", 100.0)]),
            recipe("salmon-rice", MealType::Dinner, &[("salmon", 100.0)]),
            recipe("yogurt-cup", MealType::Snack, &[("yogurt", 100.0)]),
        ],
    )
}

/// Three interchangeable recipes per meal type, every combination on target.
#[allow(dead_code)]
pub fn varied_catalog() -> Catalog {
    let recipes = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ]
    .into_iter()
    .flat_map(|meal_type| {
        (0..3).map(move |i| recipe(&format!("{meal_type}-{i}"), meal_type, &[("base", 100.0)]))
    });

    Catalog::new([product("base", 500.0, 40.0, &[])], recipes)
}
