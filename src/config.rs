use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use nutriplan_mealplan::{DEFAULT_ATTEMPT_BUDGET, GenerateOptions};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    /// Random combinations tried per day before giving up on that day
    #[serde(default = "default_attempt_budget")]
    pub attempt_budget: u32,
    #[serde(default = "default_calorie_target")]
    pub default_calorie_target: u32,
    #[serde(default = "default_protein_target")]
    pub default_protein_target: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            attempt_budget: default_attempt_budget(),
            default_calorie_target: default_calorie_target(),
            default_protein_target: default_protein_target(),
        }
    }
}

impl PlannerConfig {
    pub fn options(&self, attempts_override: Option<u32>) -> GenerateOptions {
        GenerateOptions {
            attempt_budget: attempts_override.unwrap_or(self.attempt_budget),
        }
    }
}

fn default_attempt_budget() -> u32 {
    DEFAULT_ATTEMPT_BUDGET
}

fn default_calorie_target() -> u32 {
    2000
}

fn default_protein_target() -> u32 {
    120
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProfileConfig {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default)]
    pub excluded_products: Vec<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            excluded_products: vec![],
        }
    }
}

fn default_user_id() -> String {
    "default".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (NUTRIPLAN__DATABASE__URL, DATABASE_URL, etc.)
    /// 2. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("database.url", "sqlite:nutriplan.db")?
            .set_default("database.max_connections", 5)?
            .set_default("planner.attempt_budget", i64::from(DEFAULT_ATTEMPT_BUDGET))?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // optional, ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("NUTRIPLAN")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("profile.excluded_products")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.planner.attempt_budget < 1 {
            return Err("Planner attempt_budget must be at least 1".to_string());
        }
        if self.planner.default_calorie_target < 1 {
            return Err("Planner default_calorie_target must be at least 1".to_string());
        }
        if self.planner.default_protein_target < 1 {
            return Err("Planner default_protein_target must be at least 1".to_string());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Logging format must be `pretty` or `json`, got `{}`",
                self.logging.format
            ));
        }
        Ok(())
    }
}
