//! Savings goal service
//!
//! Creating goals, recording progress and projecting completion dates.

use chrono::NaiveDate;

use crate::analysis::{calculate_savings_timeline, AnalysisResult, SavingsTimeline};
use crate::audit::EntityType;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{format_currency, GoalStatus, Money, SavingsGoal};
use crate::storage::Storage;

pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new active goal with nothing saved yet
    pub fn create(
        &self,
        name: &str,
        target_amount: Money,
        deadline: Option<NaiveDate>,
    ) -> FinanceResult<SavingsGoal> {
        let goal = SavingsGoal::new(name.trim(), target_amount, deadline);
        goal.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_create(
            EntityType::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        tracing::info!(id = %goal.id, name = %goal.name, "savings goal created");
        Ok(goal)
    }

    /// Find a goal by ID or name
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<SavingsGoal>> {
        self.storage.goals.find(identifier)
    }

    /// Active goals, newest first
    pub fn list_active(&self) -> FinanceResult<Vec<SavingsGoal>> {
        self.storage.goals.get_active()
    }

    /// Set how much has been saved towards a goal
    pub fn update_progress(
        &self,
        identifier: &str,
        current_amount: Money,
    ) -> FinanceResult<SavingsGoal> {
        if current_amount.is_negative() {
            return Err(FinanceError::Validation(
                "Saved amount cannot be negative".into(),
            ));
        }

        let mut goal = self
            .find(identifier)?
            .ok_or_else(|| FinanceError::goal_not_found(identifier))?;

        let before = goal.clone();
        goal.set_current_amount(current_amount);

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_update(
            EntityType::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &before,
            &goal,
            Some(format!(
                "current_amount: {} -> {}",
                format_currency(before.current_amount),
                format_currency(goal.current_amount)
            )),
        )?;

        tracing::info!(
            id = %goal.id,
            current = goal.current_amount.minor(),
            target = goal.target_amount.minor(),
            "savings goal progress updated"
        );
        Ok(goal)
    }

    /// Move a goal to another status
    ///
    /// Only active goals are listed and projected, so marking a goal
    /// achieved or archived takes it off the overview. Setting the status a
    /// goal already has is a no-op and writes no audit entry.
    pub fn set_status(&self, identifier: &str, status: GoalStatus) -> FinanceResult<SavingsGoal> {
        let mut goal = self
            .find(identifier)?
            .ok_or_else(|| FinanceError::goal_not_found(identifier))?;

        if goal.status == status {
            return Ok(goal);
        }

        let before = goal.clone();
        goal.set_status(status);

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_update(
            EntityType::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &before,
            &goal,
            Some(format!("status: {} -> {}", before.status, goal.status)),
        )?;

        tracing::info!(id = %goal.id, status = %goal.status, "savings goal status changed");
        Ok(goal)
    }

    /// Project a goal's completion using the current monthly surplus
    pub fn timeline(
        goal: &SavingsGoal,
        analysis: &AnalysisResult,
        today: NaiveDate,
    ) -> SavingsTimeline {
        calculate_savings_timeline(
            goal.current_amount,
            goal.target_amount,
            analysis.actual_savings,
            today,
        )
    }
}
