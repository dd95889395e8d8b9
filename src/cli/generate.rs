use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use nutriplan::Config;
use nutriplan_catalog::Catalog;
use nutriplan_mealplan::{Command, GenerateInput, RandomPicker, daily_totals, generate_plan};
use validator::Validate;

use super::ProfileArgs;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Catalog JSON file
    #[arg(long)]
    pub catalog: PathBuf,

    /// First day of the plan (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day of the plan, included (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,

    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Daily kcal target (overrides planner.default_calorie_target)
    #[arg(long)]
    pub calories: Option<u32>,

    /// Daily protein floor in grams (overrides planner.default_protein_target)
    #[arg(long)]
    pub protein: Option<u32>,

    /// Seed for reproducible plans
    #[arg(long)]
    pub seed: Option<u64>,

    /// Attempts per day (overrides planner.attempt_budget)
    #[arg(long)]
    pub attempts: Option<u32>,

    /// Store the plan in the database
    #[arg(long)]
    pub save: bool,
}

pub async fn generate(config: Config, args: GenerateArgs) -> anyhow::Result<()> {
    let catalog = Catalog::load(&args.catalog)?;
    let profile = args
        .profile
        .profile(&config, args.calories, args.protein)?;
    let options = config.planner.options(args.attempts);

    let input = GenerateInput {
        user_id: profile.user_id.to_owned(),
        start_date: args.start,
        end_date: args.end,
        calorie_target: profile.calorie_target,
        protein_target: profile.protein_target,
    };

    let mut picker = match args.seed {
        Some(seed) => RandomPicker::seeded(seed),
        None => RandomPicker::from_os_rng(),
    };

    let plan = if args.save {
        let pool =
            nutriplan::db::create_pool(&config.database.url, config.database.max_connections)
                .await?;
        nutriplan::db::migrate(&pool).await?;

        Command(pool)
            .generate(
                &input,
                &catalog,
                &profile.excluded_products,
                &options,
                &mut picker,
            )
            .await?
    } else {
        input.validate()?;
        generate_plan(
            &input,
            &catalog,
            &profile.excluded_products,
            &options,
            &mut picker,
        )?
    };

    for (date, totals) in daily_totals(&plan, &catalog, &profile.excluded_products) {
        tracing::info!(
            %date,
            kcal = totals.kcal,
            protein = totals.protein,
            fat = totals.fat,
            carbs = totals.carbs,
            fiber = totals.fiber,
            "daily totals"
        );
    }

    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
