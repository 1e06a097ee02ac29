//! Savings goal model
//!
//! A goal has a target amount and tracks how much has been put aside so far.
//! The saved amount may exceed the target; progress is reported as-is and
//! only clamped when drawn as a bar.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// Lifecycle status of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Active,
    Achieved,
    Archived,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Achieved => write!(f, "achieved"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,

    pub name: String,

    pub target_amount: Money,

    #[serde(default)]
    pub current_amount: Money,

    pub deadline: Option<NaiveDate>,

    #[serde(default)]
    pub status: GoalStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, target_amount: Money, deadline: Option<NaiveDate>) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline,
            status: GoalStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }

    /// Saved amount as a percentage of the target (0 when target is 0)
    pub fn progress_percentage(&self) -> f64 {
        self.current_amount.percentage_of(self.target_amount)
    }

    /// Progress as a fraction clamped to [0, 1], for progress bars
    pub fn progress_fraction(&self) -> f64 {
        (self.progress_percentage() / 100.0).clamp(0.0, 1.0)
    }

    /// Amount still missing, never negative
    pub fn remaining(&self) -> Money {
        let remaining = self.target_amount - self.current_amount;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    pub fn set_status(&mut self, status: GoalStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn set_current_amount(&mut self, amount: Money) {
        self.current_amount = amount;
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget);
        }

        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeProgress);
        }

        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget,
    NegativeProgress,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget => write!(f, "Target amount must be greater than 0"),
            Self::NegativeProgress => write!(f, "Saved amount cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}
