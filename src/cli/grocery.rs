use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use nutriplan::Config;
use nutriplan_catalog::Catalog;
use nutriplan_mealplan::Command;

use super::ProfileArgs;

#[derive(Args, Debug, Clone)]
pub struct GroceryArgs {
    /// Catalog JSON file
    #[arg(long)]
    pub catalog: PathBuf,

    /// First day, included (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day, included (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

pub async fn grocery(config: Config, args: GroceryArgs) -> anyhow::Result<()> {
    let catalog = Catalog::load(&args.catalog)?;
    let profile = args.profile.profile(&config, None, None)?;

    let pool =
        nutriplan::db::create_pool(&config.database.url, config.database.max_connections).await?;
    nutriplan::db::migrate(&pool).await?;

    let items = Command(pool)
        .grocery_list(
            profile.user_id.to_owned(),
            args.start,
            args.end,
            &catalog,
            &profile.excluded_products,
        )
        .await?;

    tracing::info!(user_id = %profile.user_id, items = items.len(), "grocery list built");

    println!("{}", serde_json::to_string_pretty(&items)?);

    Ok(())
}
