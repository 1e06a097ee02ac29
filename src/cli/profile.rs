//! Profile CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::models::HouseholdStatus;
use crate::services::{ProfileService, SaveProfileInput};
use crate::storage::Storage;

use super::parse_money;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the saved profile
    Show,
    /// Create or update the profile
    Set {
        /// Your name
        name: String,
        /// Monthly income (e.g., "10000000" or "10,000,000")
        income: String,
        /// Household status (single, married, married-with-kids)
        #[arg(short, long, default_value = "single")]
        status: String,
        /// Number of dependents
        #[arg(short, long, default_value_t = 0)]
        dependents: u32,
    },
}

pub fn handle_profile_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ProfileCommands,
) -> FinanceResult<()> {
    let service = ProfileService::new(storage);
    let format = settings.currency_format();

    match cmd {
        ProfileCommands::Show => match service.get()? {
            Some(profile) => {
                println!("Name:           {}", profile.name);
                println!("Monthly Income: {}", format.format(profile.monthly_income));
                println!("Status:         {}", profile.status);
                println!("Dependents:     {}", profile.dependents);
                println!(
                    "Last updated:   {}",
                    profile.updated_at.format("%Y-%m-%d %H:%M UTC")
                );
            }
            None => {
                println!("No profile yet. Run 'fintrack profile set <NAME> <INCOME>' first.");
            }
        },

        ProfileCommands::Set {
            name,
            income,
            status,
            dependents,
        } => {
            let monthly_income = parse_money(&income, "income")?;
            let status: HouseholdStatus = status.parse().map_err(FinanceError::Validation)?;

            let profile = service.save(SaveProfileInput {
                name,
                monthly_income,
                status,
                dependents,
            })?;

            println!("Profile saved!");
            println!("  Name:           {}", profile.name);
            println!("  Monthly Income: {}", format.format(profile.monthly_income));
            println!("  Status:         {}", profile.status);
            println!("  Dependents:     {}", profile.dependents);
        }
    }

    Ok(())
}
