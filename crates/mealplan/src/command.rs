use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use nutriplan_catalog::Catalog;
use nutriplan_db::table;
use nutriplan_shared::mealplan::Plan;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{GenerateInput, GenerateOptions, Picker, generate_plan, grocery};

#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    /// Validates `input`, runs the engine and stores the resulting plan.
    pub async fn generate(
        &self,
        input: &GenerateInput,
        catalog: &Catalog,
        excluded: &HashSet<String>,
        options: &GenerateOptions,
        picker: &mut impl Picker,
    ) -> nutriplan_shared::Result<Plan> {
        input.validate()?;

        let plan = generate_plan(input, catalog, excluded, options, picker)?;
        self.save_plan(&plan).await?;

        Ok(plan)
    }

    /// Inserts the plan and all of its meals in one transaction.
    pub async fn save_plan(&self, plan: &Plan) -> nutriplan_shared::Result<String> {
        let statement = Query::insert()
            .into_table(table::Plan::Table)
            .columns([
                table::Plan::Id,
                table::Plan::UserId,
                table::Plan::StartDate,
                table::Plan::EndDate,
                table::Plan::CalorieTarget,
                table::Plan::ProteinTarget,
                table::Plan::CreatedAt,
            ])
            .values_panic([
                plan.id.to_owned().into(),
                plan.user_id.to_owned().into(),
                plan.start_date.to_string().into(),
                plan.end_date.to_string().into(),
                plan.calorie_target.into(),
                plan.protein_target.into(),
                Utc::now().timestamp().into(),
            ])
            .to_owned();

        let mut tx = self.0.begin().await?;

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if !plan.meals.is_empty() {
            let mut statement = Query::insert()
                .into_table(table::PlanMeal::Table)
                .columns([
                    table::PlanMeal::Id,
                    table::PlanMeal::PlanId,
                    table::PlanMeal::UserId,
                    table::PlanMeal::Date,
                    table::PlanMeal::MealType,
                    table::PlanMeal::RecipeId,
                    table::PlanMeal::Position,
                ])
                .to_owned();

            for (position, meal) in plan.meals.iter().enumerate() {
                statement.values_panic([
                    meal.id.to_owned().into(),
                    plan.id.to_owned().into(),
                    plan.user_id.to_owned().into(),
                    meal.date.to_string().into(),
                    meal.meal_type.to_string().into(),
                    meal.recipe_id.to_owned().into(),
                    (position as i64).into(),
                ]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::info!(plan_id = %plan.id, user_id = %plan.user_id, meals = plan.meals.len(), "plan saved");

        Ok(plan.id.to_owned())
    }

    /// Grocery list for every stored meal of `user_id` within `[start, end]`.
    pub async fn grocery_list(
        &self,
        user_id: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        catalog: &Catalog,
        excluded: &HashSet<String>,
    ) -> nutriplan_shared::Result<Vec<grocery::GroceryItem>> {
        if start > end {
            nutriplan_shared::user!("start date {start} must not be after end date {end}");
        }

        let meals = crate::Query(self.0.clone())
            .meals_in_range(user_id, start, end)
            .await?;

        Ok(grocery::aggregate(&meals, catalog, excluded))
    }
}
