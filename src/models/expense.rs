//! Expense model
//!
//! An expense is a single outflow on a date, tagged with a category label.
//! Expenses are never edited once stored; they can only be deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    pub date: NaiveDate,

    /// Category label, normally one of [`ExpenseCategory::label`]
    pub category: String,

    /// Amount spent (non-negative)
    pub amount: Money,

    #[serde(default)]
    pub note: String,

    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(date: NaiveDate, category: ExpenseCategory, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            category: category.label().to_string(),
            amount,
            note: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Create an expense with a note
    pub fn with_note(
        date: NaiveDate,
        category: ExpenseCategory,
        amount: Money,
        note: impl Into<String>,
    ) -> Self {
        let mut expense = Self::new(date, category, amount);
        expense.note = note.into();
        expense
    }

    /// The typed category, if the stored label is a known one
    pub fn known_category(&self) -> Option<ExpenseCategory> {
        ExpenseCategory::from_label(&self.category)
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.date, self.category, self.amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than 0"),
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_new_expense_stores_label() {
        let expense = Expense::new(date(), ExpenseCategory::Entertainment, Money::from_units(75_000));
        assert_eq!(expense.category, "Hiburan");
        assert_eq!(expense.known_category(), Some(ExpenseCategory::Entertainment));
        assert!(expense.note.is_empty());
    }

    #[test]
    fn test_validation() {
        let mut expense = Expense::with_note(
            date(),
            ExpenseCategory::Transportation,
            Money::from_units(20_000),
            "ojek",
        );
        assert!(expense.validate().is_ok());

        expense.amount = Money::zero();
        assert_eq!(expense.validate(), Err(ExpenseValidationError::NonPositiveAmount));
    }

    #[test]
    fn test_unknown_label_loads() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "date": "2025-01-02",
            "category": "Groceries",
            "amount": 500000,
            "created_at": "2025-01-02T10:00:00Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.known_category(), None);
        assert_eq!(expense.amount, Money::from_units(5_000));
    }
}
