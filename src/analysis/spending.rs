//! Spending analyzer
//!
//! Aggregates a list of expenses against the monthly income and compares the
//! result with the 50/30/20 ideal.

use std::collections::HashMap;

use serde::Serialize;

use super::budget_rule::IdealBudget;
use super::classifier::classify;
use crate::models::{Expense, Money, SpendingType};

/// Result of analyzing expenses against an income
///
/// Derived data only; recomputed on every request.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub monthly_income: Money,
    pub total_expenses: Money,
    pub needs_total: Money,
    pub wants_total: Money,
    pub other_total: Money,
    /// Income minus expenses; negative means a deficit
    pub actual_savings: Money,
    pub needs_percentage: f64,
    pub wants_percentage: f64,
    pub savings_percentage: f64,
    pub ideal_budget: IdealBudget,
    /// Category label → total spent
    pub category_breakdown: HashMap<String, Money>,
    /// Actual minus ideal, positive means over budget
    pub needs_difference: Money,
    pub wants_difference: Money,
    pub savings_difference: Money,
}

/// Analyze `expenses` against `monthly_income`
pub fn analyze_spending(expenses: &[Expense], monthly_income: Money) -> AnalysisResult {
    let mut category_breakdown: HashMap<String, Money> = HashMap::new();
    let mut needs_total = Money::zero();
    let mut wants_total = Money::zero();
    let mut other_total = Money::zero();

    for expense in expenses {
        *category_breakdown
            .entry(expense.category.clone())
            .or_default() += expense.amount;

        match classify(&expense.category) {
            SpendingType::Needs => needs_total += expense.amount,
            SpendingType::Wants => wants_total += expense.amount,
            SpendingType::Other => other_total += expense.amount,
        }
    }

    let total_expenses = needs_total + wants_total + other_total;
    let ideal_budget = IdealBudget::from_income(monthly_income);
    let actual_savings = monthly_income - total_expenses;

    AnalysisResult {
        monthly_income,
        total_expenses,
        needs_total,
        wants_total,
        other_total,
        actual_savings,
        needs_percentage: needs_total.percentage_of(monthly_income),
        wants_percentage: wants_total.percentage_of(monthly_income),
        savings_percentage: actual_savings.percentage_of(monthly_income),
        ideal_budget,
        category_breakdown,
        needs_difference: needs_total - ideal_budget.needs,
        wants_difference: wants_total - ideal_budget.wants,
        savings_difference: actual_savings - ideal_budget.savings,
    }
}

/// How far one bucket has used up its ideal allocation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub ideal: Money,
    pub actual: Money,
    pub difference: Money,
    /// actual / ideal clamped to [0, 1]
    pub fraction: f64,
}

impl BudgetProgress {
    fn new(ideal: Money, actual: Money) -> Self {
        let fraction = if ideal.is_positive() && !actual.is_negative() {
            (actual.as_f64() / ideal.as_f64()).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            ideal,
            actual,
            difference: actual - ideal,
            fraction,
        }
    }

    pub fn is_over(&self) -> bool {
        self.difference.is_positive()
    }
}

impl AnalysisResult {
    /// Category totals sorted by amount, largest first
    ///
    /// Ties are broken by label so output is stable.
    pub fn top_categories(&self, limit: usize) -> Vec<(&str, Money)> {
        let mut rows: Vec<(&str, Money)> = self
            .category_breakdown
            .iter()
            .map(|(label, amount)| (label.as_str(), *amount))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows.truncate(limit);
        rows
    }

    pub fn category_total(&self, label: &str) -> Money {
        self.category_breakdown
            .get(label)
            .copied()
            .unwrap_or_default()
    }

    pub fn is_deficit(&self) -> bool {
        self.actual_savings.is_negative()
    }

    pub fn needs_progress(&self) -> BudgetProgress {
        BudgetProgress::new(self.ideal_budget.needs, self.needs_total)
    }

    pub fn wants_progress(&self) -> BudgetProgress {
        BudgetProgress::new(self.ideal_budget.wants, self.wants_total)
    }

    pub fn savings_progress(&self) -> BudgetProgress {
        BudgetProgress::new(self.ideal_budget.savings, self.actual_savings)
    }
}
