//! Savings goal CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_goal_details, format_goal_overview, format_goal_progress_line};
use crate::error::FinanceResult;
use crate::models::GoalStatus;
use crate::services::{GoalService, ReportService};
use crate::storage::Storage;

use super::parse_money;

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: Option<NaiveDate>,
    },
    /// List active goals with projected completion
    List,
    /// Set how much has been saved towards a goal
    Update {
        /// Goal name or ID
        goal: String,
        /// Total saved so far
        amount: String,
    },
    /// Mark a goal as achieved
    Complete {
        /// Goal name or ID
        goal: String,
    },
    /// Archive a goal without completing it
    Archive {
        /// Goal name or ID
        goal: String,
    },
    /// Return an achieved or archived goal to the active list
    Reopen {
        /// Goal name or ID
        goal: String,
    },
}

pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinanceResult<()> {
    let service = GoalService::new(storage);
    let format = settings.currency_format();

    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
        } => {
            let goal = service.create(&name, parse_money(&target, "target")?, deadline)?;
            println!("Goal '{}' added!", goal.name);
            print!("{}", format_goal_details(&goal, &format));
        }

        GoalCommands::List => {
            let today = Local::now().date_naive();
            let overview = ReportService::new(storage, settings).goal_overview(today)?;
            print!("{}", format_goal_overview(&overview, &format));
        }

        GoalCommands::Update { goal, amount } => {
            let updated = service.update_progress(&goal, parse_money(&amount, "amount")?)?;
            println!("Updated '{}'", updated.name);
            println!("  {}", format_goal_progress_line(&updated, &format));
        }

        GoalCommands::Complete { goal } => {
            let goal = service.set_status(&goal, GoalStatus::Achieved)?;
            println!("Goal '{}' marked as achieved", goal.name);
        }

        GoalCommands::Archive { goal } => {
            let goal = service.set_status(&goal, GoalStatus::Archived)?;
            println!("Goal '{}' archived", goal.name);
        }

        GoalCommands::Reopen { goal } => {
            let goal = service.set_status(&goal, GoalStatus::Active)?;
            println!("Goal '{}' is active again", goal.name);
        }
    }

    Ok(())
}
