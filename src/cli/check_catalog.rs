use std::collections::BTreeMap;
use std::path::Path;

use nutriplan::Config;
use nutriplan_catalog::Catalog;
use nutriplan_mealplan::MealPools;
use nutriplan_shared::recipe::MealType;
use serde::Serialize;
use strum::VariantArray;

use super::ProfileArgs;

#[derive(Serialize)]
struct MealTypeReport {
    recipes: usize,
    feasible: usize,
}

#[derive(Serialize)]
struct Report {
    products: usize,
    recipes: usize,
    user_id: String,
    excluded_products: BTreeMap<String, usize>,
    meal_types: BTreeMap<MealType, MealTypeReport>,
    complete: bool,
}

/// Loads and validates a catalog, then reports how much of it survives the
/// profile's exclusions.
pub fn check_catalog(
    config: Config,
    catalog: &Path,
    profile_args: ProfileArgs,
) -> anyhow::Result<()> {
    let catalog = Catalog::load(catalog)?;
    let profile = profile_args.profile(&config, None, None)?;
    let pools = MealPools::build(
        catalog.list_recipes(),
        &profile.excluded_products,
        catalog.products(),
    );

    let counts = catalog.count_by_meal_type();
    let meal_types = MealType::VARIANTS
        .iter()
        .map(|meal_type| {
            let report = MealTypeReport {
                recipes: counts.get(meal_type).copied().unwrap_or_default(),
                feasible: pools.get(*meal_type).len(),
            };
            (*meal_type, report)
        })
        .collect();

    let excluded_products = profile
        .excluded_products
        .iter()
        .map(|id| {
            if catalog.product(id).is_none() {
                tracing::warn!(product = %id, "excluded product not in catalog");
            }

            let used_by = catalog
                .list_recipes()
                .iter()
                .filter(|recipe| recipe.uses_product(id))
                .count();
            (id.to_owned(), used_by)
        })
        .collect();

    let touched = catalog
        .list_recipes()
        .iter()
        .filter(|recipe| {
            recipe
                .ingredients
                .iter()
                .any(|i| profile.is_excluded(&i.product_id))
        })
        .count();
    tracing::info!(
        touched,
        feasible = pools.len(),
        "recipes using excluded products"
    );

    let complete = match pools.ensure_complete() {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(%err, "catalog cannot produce a plan for this profile");
            false
        }
    };

    let report = Report {
        products: catalog.list_products().len(),
        recipes: catalog.list_recipes().len(),
        user_id: profile.user_id,
        excluded_products,
        meal_types,
        complete,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
