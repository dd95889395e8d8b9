use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Plan {
    Table,
    Id,
    UserId,
    StartDate,
    EndDate,
    CalorieTarget,
    ProteinTarget,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum PlanMeal {
    Table,
    Id,
    PlanId,
    UserId,
    Date,
    MealType,
    RecipeId,
    Position,
}
