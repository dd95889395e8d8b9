use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::recipe::MealType;

/// Reasons a plan cannot be generated. Every variant aborts the whole request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("start date {start} must not be after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("no valid recipes available for meal type: {0}")]
    EmptyMealPool(MealType),

    #[error("unable to generate a valid meal set for {0} with current constraints")]
    DayInfeasible(NaiveDate),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanMeal {
    pub id: String,
    pub date: NaiveDate,
    pub meal_type: MealType,
    /// Id of the catalog recipe. Substitution never creates a new recipe id.
    pub recipe_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub user_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub calorie_target: u32,
    pub protein_target: u32,
    pub meals: Vec<PlanMeal>,
}

impl Plan {
    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn meals_on(&self, date: NaiveDate) -> impl Iterator<Item = &PlanMeal> {
        self.meals.iter().filter(move |m| m.date == date)
    }
}
