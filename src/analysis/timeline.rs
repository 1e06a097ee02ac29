//! Savings timeline projection
//!
//! Estimates how long a goal takes at a fixed monthly saving rate. A month is
//! treated as 30 days for the completion date.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::Money;

const DAYS_PER_MONTH: f64 = 30.0;

/// Outcome of a savings projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SavingsTimeline {
    /// The monthly rate is zero or negative
    NotAchievable,
    /// The saved amount already covers the target
    AlreadyAchieved,
    Projected {
        /// Months to go, rounded to one decimal
        months_needed: f64,
        completion_date: NaiveDate,
        remaining: Money,
    },
}

impl SavingsTimeline {
    /// Months to reach the goal; infinite when not achievable
    pub fn months_needed(&self) -> f64 {
        match self {
            Self::NotAchievable => f64::INFINITY,
            Self::AlreadyAchieved => 0.0,
            Self::Projected { months_needed, .. } => *months_needed,
        }
    }

    pub fn is_achievable(&self) -> bool {
        !matches!(self, Self::NotAchievable)
    }

    pub fn completion_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Projected { completion_date, .. } => Some(*completion_date),
            _ => None,
        }
    }

    /// Human-readable completion estimate, e.g. "March 2027"
    pub fn estimated_completion(&self) -> String {
        match self {
            Self::NotAchievable => "Never (no savings)".to_string(),
            Self::AlreadyAchieved => "Goal already achieved!".to_string(),
            Self::Projected {
                completion_date, ..
            } => completion_date.format("%B %Y").to_string(),
        }
    }
}

/// Project how long it takes to grow `current` to `target`
pub fn calculate_savings_timeline(
    current: Money,
    target: Money,
    monthly_saving: Money,
    today: NaiveDate,
) -> SavingsTimeline {
    if !monthly_saving.is_positive() {
        return SavingsTimeline::NotAchievable;
    }

    let remaining = target - current;
    if !remaining.is_positive() {
        return SavingsTimeline::AlreadyAchieved;
    }

    let months = remaining.as_f64() / monthly_saving.as_f64();
    // Projections past the calendar's range end at NaiveDate::MAX
    let days = (months * DAYS_PER_MONTH).min(i64::MAX as f64) as i64;
    let completion_date = Duration::try_days(days)
        .and_then(|offset| today.checked_add_signed(offset))
        .unwrap_or(NaiveDate::MAX);

    SavingsTimeline::Projected {
        months_needed: (months * 10.0).round() / 10.0,
        completion_date,
        remaining,
    }
}
