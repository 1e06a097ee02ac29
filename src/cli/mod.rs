//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod chat;
pub mod expense;
pub mod export;
pub mod goal;
pub mod profile;
pub mod report;

pub use audit::handle_audit_command;
pub use chat::{handle_chat_command, ChatCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use goal::{handle_goal_command, GoalCommands};
pub use profile::{handle_profile_command, ProfileCommands};
pub use report::{
    handle_budget_command, handle_dashboard_command, handle_health_command, handle_tips_command,
};

use crate::error::{FinanceError, FinanceResult};
use crate::models::Money;

/// Parse a money argument, naming the argument in the error
pub(crate) fn parse_money(value: &str, what: &str) -> FinanceResult<Money> {
    Money::parse(value).map_err(|e| {
        FinanceError::Validation(format!(
            "Invalid {}: '{}'. Use a number like '150000' or '150,000'. Error: {}",
            what, value, e
        ))
    })
}
