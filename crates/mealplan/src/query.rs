use std::str::FromStr;

use chrono::NaiveDate;
use nutriplan_db::table;
use nutriplan_shared::{
    mealplan::{Plan, PlanMeal},
    recipe::MealType,
};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

#[derive(Default, FromRow)]
pub struct PlanRow {
    pub id: String,
    pub user_id: String,
    pub start_date: String,
    pub end_date: String,
    pub calorie_target: u32,
    pub protein_target: u32,
    pub created_at: i64,
}

#[derive(Default, FromRow)]
pub struct PlanMealRow {
    pub id: String,
    pub date: String,
    pub meal_type: String,
    pub recipe_id: String,
}

impl TryFrom<PlanMealRow> for PlanMeal {
    type Error = nutriplan_shared::Error;

    fn try_from(value: PlanMealRow) -> Result<Self, Self::Error> {
        let Ok(meal_type) = MealType::from_str(&value.meal_type) else {
            nutriplan_shared::bail!("meal {} has invalid meal type `{}`", value.id, value.meal_type);
        };

        Ok(PlanMeal {
            id: value.id,
            date: NaiveDate::from_str(&value.date)?,
            meal_type,
            recipe_id: value.recipe_id,
        })
    }
}

impl PlanRow {
    pub fn into_plan(self, meals: Vec<PlanMeal>) -> nutriplan_shared::Result<Plan> {
        Ok(Plan {
            id: self.id,
            user_id: self.user_id,
            start_date: NaiveDate::from_str(&self.start_date)?,
            end_date: NaiveDate::from_str(&self.end_date)?,
            calorie_target: self.calorie_target,
            protein_target: self.protein_target,
            meals,
        })
    }
}

const PLAN_COLUMNS: [table::Plan; 7] = [
    table::Plan::Id,
    table::Plan::UserId,
    table::Plan::StartDate,
    table::Plan::EndDate,
    table::Plan::CalorieTarget,
    table::Plan::ProteinTarget,
    table::Plan::CreatedAt,
];

const PLAN_MEAL_COLUMNS: [table::PlanMeal; 4] = [
    table::PlanMeal::Id,
    table::PlanMeal::Date,
    table::PlanMeal::MealType,
    table::PlanMeal::RecipeId,
];

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    pub async fn find_plan(&self, id: impl Into<String>) -> nutriplan_shared::Result<Option<Plan>> {
        let statement = sea_query::Query::select()
            .columns(PLAN_COLUMNS)
            .from(table::Plan::Table)
            .and_where(Expr::col(table::Plan::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some(row) = sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
        else {
            return Ok(None);
        };

        let meals = self.plan_meals(&row.id).await?;

        Ok(Some(row.into_plan(meals)?))
    }

    /// Stored plans of `user_id` with their meals, most recent start date first.
    pub async fn list_plans(
        &self,
        user_id: impl Into<String>,
    ) -> nutriplan_shared::Result<Vec<Plan>> {
        let statement = sea_query::Query::select()
            .columns(PLAN_COLUMNS)
            .from(table::Plan::Table)
            .and_where(Expr::col(table::Plan::UserId).eq(user_id.into()))
            .order_by(table::Plan::StartDate, Order::Desc)
            .order_by(table::Plan::CreatedAt, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, PlanRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let mut plans = Vec::with_capacity(rows.len());
        for row in rows {
            let meals = self.plan_meals(&row.id).await?;
            plans.push(row.into_plan(meals)?);
        }

        Ok(plans)
    }

    async fn plan_meals(&self, plan_id: &str) -> nutriplan_shared::Result<Vec<PlanMeal>> {
        let statement = sea_query::Query::select()
            .columns(PLAN_MEAL_COLUMNS)
            .from(table::PlanMeal::Table)
            .and_where(Expr::col(table::PlanMeal::PlanId).eq(plan_id))
            .order_by(table::PlanMeal::Position, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        sqlx::query_as_with::<_, PlanMealRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?
            .into_iter()
            .map(PlanMeal::try_from)
            .collect()
    }

    /// Meals of `user_id` dated within `[start, end]`, across all stored plans.
    pub async fn meals_in_range(
        &self,
        user_id: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> nutriplan_shared::Result<Vec<PlanMeal>> {
        let statement = sea_query::Query::select()
            .columns(PLAN_MEAL_COLUMNS)
            .from(table::PlanMeal::Table)
            .and_where(Expr::col(table::PlanMeal::UserId).eq(user_id.into()))
            .and_where(Expr::col(table::PlanMeal::Date).gte(start.to_string()))
            .and_where(Expr::col(table::PlanMeal::Date).lte(end.to_string()))
            .order_by(table::PlanMeal::Date, Order::Asc)
            .order_by(table::PlanMeal::PlanId, Order::Asc)
            .order_by(table::PlanMeal::Position, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        sqlx::query_as_with::<_, PlanMealRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?
            .into_iter()
            .map(PlanMeal::try_from)
            .collect()
    }
}
