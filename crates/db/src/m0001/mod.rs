mod plan;
mod plan_meal;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "nutriplan",
    "m0001",
    vec_box![],
    vec_box![
        plan::CreateTable,
        plan::CreateIdx1,
        plan_meal::CreateTable,
        plan_meal::CreateIdx1
    ]
);
