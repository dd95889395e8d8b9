use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use nutriplan_catalog::Catalog;
use nutriplan_shared::mealplan::{Plan, PlanMeal};
use ulid::Ulid;
use validator::Validate;

use crate::{
    DEFAULT_ATTEMPT_BUDGET, DailySampler, GenerateError, Macro, MealPools, Picker, Targets,
    recipe_macro, substitute,
};

#[derive(Validate, Clone, Debug)]
pub struct GenerateInput {
    #[validate(length(min = 1))]
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(min = 1))]
    pub calorie_target: u32,
    #[validate(range(min = 1))]
    pub protein_target: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Random combinations tried per day before the day is declared infeasible.
    pub attempt_budget: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
        }
    }
}

/// Builds a plan with one recipe per meal type for every day of
/// `[start_date, end_date]`.
///
/// Recipes are resolved against `excluded` first; every meal type needs at
/// least one resolvable recipe. Days are sampled in ascending order and the
/// first infeasible day aborts the whole call, so a plan is either complete
/// or not returned at all.
#[tracing::instrument(
    skip_all,
    fields(user_id = %input.user_id, start = %input.start_date, end = %input.end_date)
)]
pub fn generate_plan(
    input: &GenerateInput,
    catalog: &Catalog,
    excluded: &HashSet<String>,
    options: &GenerateOptions,
    picker: &mut impl Picker,
) -> Result<Plan, GenerateError> {
    if input.start_date > input.end_date {
        return Err(GenerateError::InvalidRange {
            start: input.start_date,
            end: input.end_date,
        });
    }

    let pools = MealPools::build(catalog.list_recipes(), excluded, catalog.products());
    let targets = Targets::new(input.calorie_target, input.protein_target);
    let sampler = DailySampler::new(&pools, targets, options.attempt_budget)?;

    let mut meals = vec![];
    for date in input
        .start_date
        .iter_days()
        .take_while(|date| *date <= input.end_date)
    {
        let selection = sampler.sample(date, picker)?;

        meals.extend(selection.meals.into_iter().map(|(meal_type, entry)| PlanMeal {
            id: Ulid::new().to_string(),
            date,
            meal_type,
            recipe_id: entry.recipe.id.to_owned(),
        }));
    }

    let plan = Plan {
        id: Ulid::new().to_string(),
        user_id: input.user_id.to_owned(),
        start_date: input.start_date,
        end_date: input.end_date,
        calorie_target: input.calorie_target,
        protein_target: input.protein_target,
        meals,
    };

    tracing::info!(plan_id = %plan.id, meals = plan.meals.len(), "plan generated");

    Ok(plan)
}

/// Per-day macro totals of `plan`, with each recipe viewed through the
/// user's exclusions. Meals whose recipe no longer resolves are left out.
pub fn daily_totals(
    plan: &Plan,
    catalog: &Catalog,
    excluded: &HashSet<String>,
) -> BTreeMap<NaiveDate, Macro> {
    let mut totals = BTreeMap::<NaiveDate, Macro>::new();

    for meal in &plan.meals {
        let Some(recipe) = catalog
            .recipe(&meal.recipe_id)
            .and_then(|recipe| substitute(recipe, excluded, catalog.products()))
        else {
            tracing::warn!(recipe = %meal.recipe_id, date = %meal.date, "recipe not resolvable");
            continue;
        };

        *totals.entry(meal.date).or_default() += recipe_macro(&recipe, catalog.products());
    }

    totals
}
