#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn demo_catalog() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/catalog.json")
}

/// Runs the binary with an isolated database and no config file.
pub fn nutriplan(database: &Path, args: &[&str]) -> anyhow::Result<Output> {
    nutriplan_with_env(database, &[], args)
}

pub fn nutriplan_with_env(
    database: &Path,
    envs: &[(&str, &str)],
    args: &[&str],
) -> anyhow::Result<Output> {
    let config = database.with_extension("toml");
    let output = Command::new(env!("CARGO_BIN_EXE_nutriplan"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env("DATABASE_URL", format!("sqlite:{}", database.display()))
        .env("RUST_LOG", "warn")
        .env_remove("CONFIG_PATH")
        .envs(envs.iter().copied())
        .output()?;

    Ok(output)
}
