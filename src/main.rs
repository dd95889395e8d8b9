use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// nutriplan - Macro-targeted meal planning
#[derive(Parser)]
#[command(name = "nutriplan")]
#[command(about = "Generate meal plans that hit daily calorie and protein targets", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Load and validate a catalog, report what a profile can use
    CheckCatalog {
        /// Catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        #[command(flatten)]
        profile: cli::ProfileArgs,
    },
    /// Generate a plan and print it as JSON
    Generate(cli::GenerateArgs),
    /// Print the grocery list of stored plans as JSON
    Grocery(cli::GroceryArgs),
    /// Print the stored plans of a user as JSON
    Plans(cli::PlansArgs),
    /// Print one stored plan as JSON
    Plan {
        /// Plan id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = nutriplan::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    nutriplan::observability::init_observability(&config.logging)?;

    let result = match cli.command {
        Commands::Migrate => cli::migrate(config).await,
        Commands::CheckCatalog { catalog, profile } => {
            cli::check_catalog(config, &catalog, profile)
        }
        Commands::Generate(args) => cli::generate(config, args).await,
        Commands::Grocery(args) => cli::grocery(config, args).await,
        Commands::Plans(args) => cli::plans(config, args).await,
        Commands::Plan { id } => cli::plan(config, id).await,
    };

    if let Err(err) = &result {
        tracing::error!(%err, "command failed");
    }

    result
}
