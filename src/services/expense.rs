//! Expense service
//!
//! Recording, listing and deleting expenses, plus per-category summaries.

use chrono::{Datelike, Duration, Local, Months, NaiveDate};

use crate::audit::EntityType;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Expense, ExpenseCategory, Money};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Calendar window relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthWindow {
    #[default]
    All,
    /// From the first of the current month onwards
    ThisMonth,
    /// The whole previous calendar month
    LastMonth,
}

impl MonthWindow {
    /// Inclusive `(start, end)` bounds for this window, if any
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDate, Option<NaiveDate>)> {
        let first_of_month = today.with_day(1)?;
        match self {
            Self::All => None,
            Self::ThisMonth => Some((first_of_month, None)),
            Self::LastMonth => {
                let start = first_of_month.checked_sub_months(Months::new(1))?;
                let end = first_of_month - Duration::days(1);
                Some((start, Some(end)))
            }
        }
    }
}

impl std::str::FromStr for MonthWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "all" => Ok(Self::All),
            "thismonth" | "this" => Ok(Self::ThisMonth),
            "lastmonth" | "last" => Ok(Self::LastMonth),
            _ => Err(format!(
                "Unknown month filter: '{}'. Use all, this-month or last-month",
                s
            )),
        }
    }
}

/// Options for filtering expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub category: Option<ExpenseCategory>,
    /// Inclusive lower bound
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound
    pub end_date: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn since(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Restrict to a calendar window relative to `today`
    pub fn window(mut self, window: MonthWindow, today: NaiveDate) -> Self {
        if let Some((start, end)) = window.bounds(today) {
            self.start_date = Some(start);
            self.end_date = end;
        }
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    /// Defaults to today when not given
    pub date: Option<NaiveDate>,
    pub category: ExpenseCategory,
    pub amount: Money,
    pub note: Option<String>,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn create(&self, input: CreateExpenseInput) -> FinanceResult<Expense> {
        let date = input.date.unwrap_or_else(|| Local::now().date_naive());
        let note = input.note.map(|n| n.trim().to_string()).unwrap_or_default();

        let expense = Expense::with_note(date, input.category, input.amount, note);
        expense
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(format!("{} {}", expense.date, expense.category)),
            &expense,
        )?;

        tracing::info!(
            id = %expense.id,
            category = %expense.category,
            amount = expense.amount.minor(),
            "expense recorded"
        );
        Ok(expense)
    }

    /// Find an expense by its display ID or UUID prefix
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<Expense>> {
        self.storage.expenses.find(identifier)
    }

    /// List expenses matching `filter`, newest first
    pub fn list(&self, filter: ExpenseFilter) -> FinanceResult<Vec<Expense>> {
        let mut expenses = if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
            self.storage.expenses.get_by_date_range(start, end)?
        } else {
            self.storage.expenses.get_all()?
        };

        if let Some(start) = filter.start_date {
            expenses.retain(|e| e.date >= start);
        }
        if let Some(end) = filter.end_date {
            expenses.retain(|e| e.date <= end);
        }
        if let Some(category) = filter.category {
            expenses.retain(|e| e.known_category() == Some(category));
        }

        if let Some(limit) = filter.limit {
            expenses.truncate(limit);
        }

        tracing::debug!(count = expenses.len(), "listed expenses");
        Ok(expenses)
    }

    /// Every stored expense, newest first
    pub fn all(&self) -> FinanceResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Delete an expense by identifier
    pub fn delete(&self, identifier: &str) -> FinanceResult<Expense> {
        let expense = self
            .find(identifier)?
            .ok_or_else(|| FinanceError::expense_not_found(identifier))?;

        self.storage.expenses.delete(expense.id)?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(format!("{} {}", expense.date, expense.category)),
            &expense,
        )?;

        tracing::info!(id = %expense.id, "expense deleted");
        Ok(expense)
    }

    /// Per-category totals for the expenses matching `filter`, largest first
    pub fn summary_by_category(&self, filter: ExpenseFilter) -> FinanceResult<Vec<(String, Money)>> {
        let expenses = self.list(ExpenseFilter {
            limit: None,
            ..filter
        })?;

        let mut totals: Vec<(String, Money)> = Vec::new();
        for expense in &expenses {
            match totals.iter_mut().find(|(label, _)| *label == expense.category) {
                Some((_, total)) => *total += expense.amount,
                None => totals.push((expense.category.clone(), expense.amount)),
            }
        }

        totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(totals)
    }

    /// Sum of a list of expenses
    pub fn total(expenses: &[Expense]) -> Money {
        expenses.iter().map(|e| e.amount).sum()
    }
}
