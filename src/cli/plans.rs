use clap::Args;
use nutriplan::Config;
use nutriplan_mealplan::Query;

use super::ProfileArgs;

#[derive(Args, Debug, Clone)]
pub struct PlansArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,
}

/// Prints every stored plan of the user with its meals, newest start date first.
pub async fn plans(config: Config, args: PlansArgs) -> anyhow::Result<()> {
    let profile = args.profile.profile(&config, None, None)?;

    let pool =
        nutriplan::db::create_pool(&config.database.url, config.database.max_connections).await?;
    nutriplan::db::migrate(&pool).await?;

    let plans = Query(pool).list_plans(profile.user_id.to_owned()).await?;

    tracing::info!(user_id = %profile.user_id, plans = plans.len(), "plans listed");

    println!("{}", serde_json::to_string_pretty(&plans)?);

    Ok(())
}

pub async fn plan(config: Config, id: String) -> anyhow::Result<()> {
    let pool =
        nutriplan::db::create_pool(&config.database.url, config.database.max_connections).await?;
    nutriplan::db::migrate(&pool).await?;

    let Some(plan) = Query(pool).find_plan(id.to_owned()).await? else {
        anyhow::bail!("plan {id} not found");
    };

    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
