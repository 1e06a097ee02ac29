//! Personalised financial tips
//!
//! Tips are produced in a fixed order; the "all good" tip only appears when
//! nothing else applies.

use serde::Serialize;

use super::spending::AnalysisResult;
use crate::models::{CurrencyFormat, ExpenseCategory, Money};

/// Savings rate below this is flagged
pub const LOW_SAVINGS_PERCENT: f64 = 10.0;
/// Savings rate above this is praised
pub const HIGH_SAVINGS_PERCENT: f64 = 30.0;

/// A single piece of advice
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum Tip {
    LowSavings,
    NeedsOverBudget(Money),
    WantsOverBudget(Money),
    HighSavings,
    RestaurantSpending(Money),
    AllGood,
}

impl Tip {
    pub fn title(&self) -> &'static str {
        match self {
            Self::LowSavings => "Savings",
            Self::NeedsOverBudget(_) => "Needs spending",
            Self::WantsOverBudget(_) => "Wants spending",
            Self::HighSavings => "Excellent!",
            Self::RestaurantSpending(_) => "Food spending",
            Self::AllGood => "Great job!",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::LowSavings => "💡",
            Self::NeedsOverBudget(_) => "⚠️",
            Self::WantsOverBudget(_) => "🎯",
            Self::HighSavings => "✨",
            Self::RestaurantSpending(_) => "🍽️",
            Self::AllGood => "👍",
        }
    }

    pub fn message(&self, format: &CurrencyFormat) -> String {
        match self {
            Self::LowSavings => "Your savings rate is below 10%. Aim for at least 10-20% of \
                                 your income for a safer future."
                .to_string(),
            Self::NeedsOverBudget(over) => format!(
                "Over budget by {}. Review your monthly bills and look for cheaper \
                 alternatives.",
                format.format(*over)
            ),
            Self::WantsOverBudget(over) => format!(
                "Over budget by {}. Consider cutting back on entertainment or \
                 non-urgent shopping.",
                format.format(*over)
            ),
            Self::HighSavings => "Your savings rate is very good! Consider investing so your \
                                  money works for you."
                .to_string(),
            Self::RestaurantSpending(spent) => format!(
                "Dining out cost {}. Meal prep can save up to 50%!",
                format.format(*spent)
            ),
            Self::AllGood => "Your finances are in good shape. Keep up the good work!".to_string(),
        }
    }

    /// Icon, title and message on one line
    pub fn render(&self, format: &CurrencyFormat) -> String {
        format!("{} {}: {}", self.icon(), self.title(), self.message(format))
    }
}

/// Generate tips for an analysis
///
/// `restaurant_threshold` is the dining-out total above which the food tip
/// fires.
pub fn financial_tips(analysis: &AnalysisResult, restaurant_threshold: Money) -> Vec<Tip> {
    let mut tips = Vec::new();

    if analysis.savings_percentage < LOW_SAVINGS_PERCENT {
        tips.push(Tip::LowSavings);
    }

    if analysis.needs_difference.is_positive() {
        tips.push(Tip::NeedsOverBudget(analysis.needs_difference));
    }

    if analysis.wants_difference.is_positive() {
        tips.push(Tip::WantsOverBudget(analysis.wants_difference));
    }

    if analysis.savings_percentage > HIGH_SAVINGS_PERCENT {
        tips.push(Tip::HighSavings);
    }

    let restaurant = analysis.category_total(ExpenseCategory::DiningOut.label());
    if restaurant > restaurant_threshold {
        tips.push(Tip::RestaurantSpending(restaurant));
    }

    if tips.is_empty() {
        tips.push(Tip::AllGood);
    }

    tips
}
