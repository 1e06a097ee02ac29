//! Service layer for fintrack
//!
//! Services sit on top of storage: they validate input, write the audit log
//! and combine stored data with the analysis functions.

pub mod expense;
pub mod goal;
pub mod profile;
pub mod report;

pub use expense::{CreateExpenseInput, ExpenseFilter, ExpenseService, MonthWindow};
pub use goal::GoalService;
pub use profile::{ProfileService, SaveProfileInput};
pub use report::{BudgetPlan, Dashboard, GoalProgress, ReportService};
