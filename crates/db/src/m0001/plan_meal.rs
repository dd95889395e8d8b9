use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement,
    Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Plan, PlanMeal};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(PlanMeal::Table)
        .col(
            ColumnDef::new(PlanMeal::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(PlanMeal::PlanId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(PlanMeal::UserId).string().not_null())
        .col(
            ColumnDef::new(PlanMeal::Date)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(
            ColumnDef::new(PlanMeal::MealType)
                .string()
                .not_null()
                .string_len(9),
        )
        .col(ColumnDef::new(PlanMeal::RecipeId).string().not_null())
        .col(ColumnDef::new(PlanMeal::Position).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .from(PlanMeal::Table, PlanMeal::PlanId)
                .to(Plan::Table, Plan::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(PlanMeal::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_plan_meal_user_date")
        .table(PlanMeal::Table)
        .col(PlanMeal::UserId)
        .col(PlanMeal::Date)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_plan_meal_user_date")
        .table(PlanMeal::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
