use nutriplan::Config;

pub async fn migrate(config: Config) -> anyhow::Result<()> {
    tracing::info!(url = %config.database.url, "Migrating database");

    let pool = nutriplan::db::create_pool(&config.database.url, 1).await?;
    nutriplan::db::migrate(&pool).await?;

    tracing::info!("Migrations applied");

    Ok(())
}
