mod check_catalog;
mod generate;
mod grocery;
mod migrate;
mod plans;

pub use check_catalog::check_catalog;
pub use generate::{GenerateArgs, generate};
pub use grocery::{GroceryArgs, grocery};
pub use migrate::migrate;
pub use plans::{PlansArgs, plan, plans};

use clap::Args;
use nutriplan::Config;
use nutriplan_shared::user::Profile;
use validator::Validate;

/// Overrides of the `[profile]` config section
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// User the plan belongs to
    #[arg(long)]
    pub user: Option<String>,

    /// Product id to exclude, repeatable, added to the configured exclusions
    #[arg(long = "exclude", value_name = "PRODUCT_ID")]
    pub exclude: Vec<String>,
}

impl ProfileArgs {
    pub fn profile(
        &self,
        config: &Config,
        calories: Option<u32>,
        protein: Option<u32>,
    ) -> anyhow::Result<Profile> {
        let profile = Profile {
            user_id: self
                .user
                .to_owned()
                .unwrap_or_else(|| config.profile.user_id.to_owned()),
            calorie_target: calories.unwrap_or(config.planner.default_calorie_target),
            protein_target: protein.unwrap_or(config.planner.default_protein_target),
            excluded_products: config
                .profile
                .excluded_products
                .iter()
                .chain(self.exclude.iter())
                .filter(|id| !id.is_empty())
                .cloned()
                .collect(),
        };

        profile.validate()?;

        Ok(profile)
    }
}
