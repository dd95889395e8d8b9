use std::collections::HashSet;

use nutriplan_mealplan::{
    GenerateError, GenerateOptions, RandomPicker, daily_totals, generate_plan,
};
use nutriplan_shared::recipe::MealType;

use crate::helpers::{Scripted, balanced_catalog, date, input, product, recipe, varied_catalog};

mod helpers;

#[test]
fn test_single_day_on_target_is_accepted_first_attempt() {
    let mut picker = Scripted::new(|_, len| len - 1);
    let plan = generate_plan(
        &input("2024-06-10", "2024-06-10", 2000, 140),
        &balanced_catalog(),
        &HashSet::new(),
        &GenerateOptions::default(),
        &mut picker,
    )
    .unwrap();

    assert_eq!(picker.calls, 4);
    assert_eq!(
        plan.meals
            .iter()
            .map(|m| (m.date, m.meal_type, m.recipe_id.as_str()))
            .collect::<Vec<_>>(),
        vec![
            (date("2024-06-10"), MealType::Breakfast, "omelette"),
            (date("2024-06-10"), MealType::Lunch, "chicken-salad"),
            (date("2024-06-10"), MealType::Dinner, "salmon-rice"),
            (date("2024-06-10"), MealType::Snack, "yogurt-cup"),
        ]
    );
}

#[test]
fn test_breakfast_without_substitute_is_empty_pool() {
    let excluded = HashSet::from(["egg".to_owned()]);
    let mut picker = Scripted::new(|_, _| 0);
    let err = generate_plan(
        &input("2024-06-10", "2024-06-16", 2000, 140),
        &balanced_catalog(),
        &excluded,
        &GenerateOptions::default(),
        &mut picker,
    )
    .unwrap_err();

    assert_eq!(err, GenerateError::EmptyMealPool(MealType::Breakfast));
    assert!(err.to_string().contains("breakfast"));
    assert_eq!(picker.calls, 0);
}

#[test]
fn test_inverted_range_is_rejected_before_sampling() {
    let mut picker = Scripted::new(|_, _| 0);
    let err = generate_plan(
        &input("2024-06-10", "2024-06-09", 2000, 140),
        &balanced_catalog(),
        &HashSet::new(),
        &GenerateOptions::default(),
        &mut picker,
    )
    .unwrap_err();

    assert_eq!(
        err,
        GenerateError::InvalidRange {
            start: date("2024-06-10"),
            end: date("2024-06-09"),
        }
    );
    assert_eq!(picker.calls, 0);
}

#[test]
fn test_unreachable_targets_exhaust_budget() {
    let mut picker = Scripted::new(|call, len| call % len);
    let err = generate_plan(
        &input("2024-06-10", "2024-06-16", 5000, 140),
        &balanced_catalog(),
        &HashSet::new(),
        &GenerateOptions::default(),
        &mut picker,
    )
    .unwrap_err();

    assert_eq!(err, GenerateError::DayInfeasible(date("2024-06-10")));
    assert!(err.to_string().contains("2024-06-10"));
    assert_eq!(picker.calls, 60 * 4);
}

#[test]
fn test_attempt_budget_is_configurable() {
    let mut picker = Scripted::new(|_, _| 0);
    let options = GenerateOptions { attempt_budget: 80 };
    let result = generate_plan(
        &input("2024-06-10", "2024-06-10", 1000, 140),
        &balanced_catalog(),
        &HashSet::new(),
        &options,
        &mut picker,
    );

    assert!(result.is_err());
    assert_eq!(picker.calls, 80 * 4);
}

#[test]
fn test_failure_on_later_day_returns_no_plan() {
    let mut catalog_recipes = balanced_catalog().list_recipes().to_vec();
    catalog_recipes.push(recipe("feast", MealType::Breakfast, &[("lard", 100.0)]));
    let catalog = nutriplan_catalog::Catalog::new(
        balanced_catalog()
            .list_products()
            .into_iter()
            .cloned()
            .chain([product("lard", 5000.0, 0.0, &[])]),
        catalog_recipes,
    );

    // first day picks index 0 everywhere, every later draw picks the feast
    let mut picker = Scripted::new(|call, len| if call < 4 { 0 } else { 1 % len });
    let err = generate_plan(
        &input("2024-06-10", "2024-06-12", 2000, 140),
        &catalog,
        &HashSet::new(),
        &GenerateOptions::default(),
        &mut picker,
    )
    .unwrap_err();

    assert_eq!(err, GenerateError::DayInfeasible(date("2024-06-11")));
    assert_eq!(picker.calls, 4 + 60 * 4);
}

#[test]
fn test_week_plan_shape() {
    let plan = generate_plan(
        &input("2024-06-10", "2024-06-16", 2000, 150),
        &varied_catalog(),
        &HashSet::new(),
        &GenerateOptions::default(),
        &mut RandomPicker::from_os_rng(),
    )
    .unwrap();

    assert_eq!(plan.days(), 7);
    assert_eq!(plan.meals.len(), 28);
    assert_eq!(plan.start_date, date("2024-06-10"));
    assert_eq!(plan.end_date, date("2024-06-16"));

    for day in plan.start_date.iter_days().take(7) {
        let types = plan.meals_on(day).map(|m| m.meal_type).collect::<Vec<_>>();
        assert_eq!(
            types,
            vec![
                MealType::Breakfast,
                MealType::Lunch,
                MealType::Dinner,
                MealType::Snack
            ]
        );
    }

    let catalog = varied_catalog();
    for meal in &plan.meals {
        let recipe = catalog.recipe(&meal.recipe_id).unwrap();
        assert_eq!(recipe.meal_type, meal.meal_type);
    }
}

#[test]
fn test_same_seed_same_selection() {
    let run = |seed| {
        generate_plan(
            &input("2024-06-10", "2024-06-16", 2000, 150),
            &varied_catalog(),
            &HashSet::new(),
            &GenerateOptions::default(),
            &mut RandomPicker::seeded(seed),
        )
        .unwrap()
        .meals
        .into_iter()
        .map(|m| m.recipe_id)
        .collect::<Vec<_>>()
    };

    assert_eq!(run(11), run(11));
}

#[test]
fn test_substituted_recipe_keeps_original_id() {
    let catalog = balanced_catalog();
    let excluded = HashSet::from(["chicken".to_owned()]);
    let plan = generate_plan(
        &input("2024-06-10", "2024-06-11", 2000, 140),
        &catalog,
        &excluded,
        &GenerateOptions::default(),
        &mut RandomPicker::seeded(2),
    )
    .unwrap();

    assert!(
        plan.meals
            .iter()
            .filter(|m| m.meal_type == MealType::Lunch)
            .all(|m| m.recipe_id == "chicken-salad")
    );

    let totals = daily_totals(&plan, &catalog, &excluded);
    assert_eq!(totals.len(), 2);
    assert!(totals.values().all(|t| t.kcal == 2000.0 && t.protein == 140.0));
}
