//! Financial health score
//!
//! A 0-100 score built from three capped components:
//!
//! | component       | max | input                                  |
//! |-----------------|-----|----------------------------------------|
//! | savings rate    | 40  | savings percentage of income           |
//! | needs adherence | 30  | distance of needs percentage from 50%  |
//! | expense control | 30  | expenses / (expenses + actual savings) |

use serde::Serialize;
use std::fmt;

use super::spending::AnalysisResult;

pub const SAVINGS_COMPONENT_MAX: f64 = 40.0;
pub const NEEDS_COMPONENT_MAX: f64 = 30.0;
pub const EXPENSE_CONTROL_COMPONENT_MAX: f64 = 30.0;

/// Letter grade band for a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum HealthGrade {
    NeedsImprovement,
    Fair,
    Good,
    Excellent,
}

impl HealthGrade {
    /// Grade for an unrounded total score
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Fair
        } else {
            Self::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "A - Excellent!",
            Self::Good => "B - Good",
            Self::Fair => "C - Fair",
            Self::NeedsImprovement => "D - Needs Improvement",
        }
    }

    /// Traffic-light indicator shown next to the score
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Excellent => "🟢",
            Self::Good => "🟡",
            Self::Fair => "🟠",
            Self::NeedsImprovement => "🔴",
        }
    }
}

impl fmt::Display for HealthGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Computed health score with its breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthScore {
    /// Rounded total, 0..=100
    pub score: u8,
    pub grade: HealthGrade,
    pub savings_component: f64,
    pub needs_component: f64,
    pub expense_control_component: f64,
}

impl HealthScore {
    pub fn indicator(&self) -> &'static str {
        self.grade.indicator()
    }
}

/// Points for the savings rate
pub fn savings_component(savings_percentage: f64) -> f64 {
    if savings_percentage >= 20.0 {
        40.0
    } else if savings_percentage >= 10.0 {
        30.0
    } else if savings_percentage >= 5.0 {
        20.0
    } else {
        10.0
    }
}

/// Points for keeping needs near 50% of income, floored at 0
pub fn needs_component(needs_percentage: f64) -> f64 {
    (NEEDS_COMPONENT_MAX - (needs_percentage - 50.0).abs() / 2.0).max(0.0)
}

/// Share of available money that went to expenses
///
/// The denominator is the income. When it is zero there is nothing to
/// divide: no spending reads as ratio 0, any spending as unbounded.
pub fn expense_ratio(analysis: &AnalysisResult) -> f64 {
    let available = analysis.total_expenses + analysis.actual_savings;

    if available.is_positive() {
        analysis.total_expenses.as_f64() / available.as_f64()
    } else if analysis.total_expenses.is_zero() {
        0.0
    } else {
        f64::INFINITY
    }
}

/// Points for the expense ratio
pub fn expense_control_component(ratio: f64) -> f64 {
    if ratio <= 0.7 {
        30.0
    } else if ratio <= 0.8 {
        20.0
    } else if ratio <= 0.9 {
        10.0
    } else {
        0.0
    }
}

/// Score an analysis
pub fn financial_health_score(analysis: &AnalysisResult) -> HealthScore {
    let savings = savings_component(analysis.savings_percentage);
    let needs = needs_component(analysis.needs_percentage);
    let expense_control = expense_control_component(expense_ratio(analysis));

    let total = savings + needs + expense_control;

    HealthScore {
        score: total.round().clamp(0.0, 100.0) as u8,
        grade: HealthGrade::from_score(total),
        savings_component: savings,
        needs_component: needs,
        expense_control_component: expense_control,
    }
}
