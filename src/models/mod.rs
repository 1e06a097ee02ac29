//! Core data models for fintrack
//!
//! Expenses, the user profile, savings goals, money and the category set.

pub mod category;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod money;
pub mod profile;

pub use category::{ExpenseCategory, SpendingType};
pub use expense::Expense;
pub use goal::{GoalStatus, SavingsGoal};
pub use ids::{ExpenseId, GoalId};
pub use money::{format_currency, CurrencyFormat, Money, MoneyParseError};
pub use profile::{HouseholdStatus, UserProfile};
