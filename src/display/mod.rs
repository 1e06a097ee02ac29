//! Display formatting for terminal output
//!
//! Turns models and reports into plain text for the CLI.

pub mod analysis;
pub mod expense;
pub mod goal;
pub mod report;

pub use analysis::{
    format_budget_plan, format_budget_table, format_dashboard, format_expense_breakdown,
    format_health, format_tips,
};
pub use expense::{
    format_category_list, format_category_summary, format_expense_details, format_expense_list,
    format_expense_row,
};
pub use goal::{format_goal_details, format_goal_overview, format_goal_progress_line};
