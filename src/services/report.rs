//! Report service
//!
//! Combines the profile, stored expenses and goals with the analysis
//! functions. Every report is recomputed from scratch; nothing here is
//! persisted.

use chrono::NaiveDate;
use serde::Serialize;

use crate::analysis::{
    analyze_spending, financial_health_score, financial_tips, AnalysisResult, BudgetProgress,
    HealthScore, SavingsTimeline, Tip,
};
use crate::config::settings::Settings;
use crate::error::FinanceResult;
use crate::models::{SavingsGoal, UserProfile};
use crate::storage::Storage;

use super::goal::GoalService;
use super::profile::ProfileService;

/// Everything shown on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub profile: UserProfile,
    pub expense_count: usize,
    pub analysis: AnalysisResult,
    pub health: HealthScore,
    pub tips: Vec<Tip>,
}

impl Dashboard {
    pub fn has_expenses(&self) -> bool {
        self.expense_count > 0
    }
}

/// The 50/30/20 plan against actual spending
#[derive(Debug, Clone, Serialize)]
pub struct BudgetPlan {
    pub analysis: AnalysisResult,
    pub needs: BudgetProgress,
    pub wants: BudgetProgress,
    pub savings: BudgetProgress,
    /// Expenses exceed income
    pub deficit: bool,
}

/// One active goal with its projection
#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress {
    pub goal: SavingsGoal,
    pub progress_percentage: f64,
    pub timeline: SavingsTimeline,
}

pub struct ReportService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ReportService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Analyze all stored expenses against the profile's income
    ///
    /// Fails with not-found when no profile has been saved.
    pub fn analysis(&self) -> FinanceResult<(UserProfile, AnalysisResult, usize)> {
        let profile = ProfileService::new(self.storage).require()?;
        let expenses = self.storage.expenses.get_all()?;
        let analysis = analyze_spending(&expenses, profile.monthly_income);

        tracing::debug!(
            expenses = expenses.len(),
            total = analysis.total_expenses.minor(),
            savings = analysis.actual_savings.minor(),
            "analysis computed"
        );
        Ok((profile, analysis, expenses.len()))
    }

    pub fn dashboard(&self) -> FinanceResult<Dashboard> {
        let (profile, analysis, expense_count) = self.analysis()?;
        let health = financial_health_score(&analysis);
        let tips = financial_tips(&analysis, self.settings.restaurant_alert_threshold);

        Ok(Dashboard {
            profile,
            expense_count,
            analysis,
            health,
            tips,
        })
    }

    pub fn budget_plan(&self) -> FinanceResult<BudgetPlan> {
        let (_, analysis, _) = self.analysis()?;

        Ok(BudgetPlan {
            needs: analysis.needs_progress(),
            wants: analysis.wants_progress(),
            savings: analysis.savings_progress(),
            deficit: analysis.is_deficit(),
            analysis,
        })
    }

    /// Active goals with progress and a projection from `today`
    pub fn goal_overview(&self, today: NaiveDate) -> FinanceResult<Vec<GoalProgress>> {
        let (_, analysis, _) = self.analysis()?;
        let goals = GoalService::new(self.storage).list_active()?;

        Ok(goals
            .into_iter()
            .map(|goal| GoalProgress {
                progress_percentage: goal.progress_percentage(),
                timeline: GoalService::timeline(&goal, &analysis, today),
                goal,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::HealthGrade;
    use crate::config::paths::FintrackPaths;
    use crate::models::{ExpenseCategory, HouseholdStatus, Money};
    use crate::services::{CreateExpenseInput, ExpenseService, SaveProfileInput};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    fn save_profile(storage: &Storage, income: i64) {
        ProfileService::new(storage)
            .save(SaveProfileInput {
                name: "Tari".into(),
                monthly_income: Money::from_units(income),
                status: HouseholdStatus::Single,
                dependents: 0,
            })
            .unwrap();
    }

    fn add_expense(storage: &Storage, category: ExpenseCategory, units: i64) {
        ExpenseService::new(storage)
            .create(CreateExpenseInput {
                date: NaiveDate::from_ymd_opt(2025, 6, 10),
                category,
                amount: Money::from_units(units),
                note: None,
            })
            .unwrap();
    }

    #[test]
    fn test_dashboard_requires_profile() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ReportService::new(&storage, &settings);

        assert!(service.dashboard().unwrap_err().is_not_found());
    }

    #[test]
    fn test_dashboard_without_expenses() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        save_profile(&storage, 10_000_000);

        let dashboard = ReportService::new(&storage, &settings).dashboard().unwrap();
        assert!(!dashboard.has_expenses());
        assert_eq!(dashboard.analysis.actual_savings, Money::from_units(10_000_000));
    }

    #[test]
    fn test_dashboard_scores_and_tips() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        save_profile(&storage, 10_000_000);
        add_expense(&storage, ExpenseCategory::Housing, 5_000_000);
        add_expense(&storage, ExpenseCategory::DiningOut, 1_200_000);

        let dashboard = ReportService::new(&storage, &settings).dashboard().unwrap();
        assert_eq!(dashboard.expense_count, 2);
        // savings 38% → 40, needs 50% → 30, ratio 0.62 → 30
        assert_eq!(dashboard.health.score, 100);
        assert_eq!(dashboard.health.grade, HealthGrade::Excellent);
        assert_eq!(
            dashboard.tips,
            vec![
                Tip::HighSavings,
                Tip::RestaurantSpending(Money::from_units(1_200_000))
            ]
        );
    }

    #[test]
    fn test_restaurant_threshold_from_settings() {
        let (_temp_dir, storage) = create_test_storage();
        let mut settings = Settings::default();
        settings.restaurant_alert_threshold = Money::from_units(2_000_000);
        save_profile(&storage, 10_000_000);
        add_expense(&storage, ExpenseCategory::Housing, 5_000_000);
        add_expense(&storage, ExpenseCategory::DiningOut, 1_200_000);

        let dashboard = ReportService::new(&storage, &settings).dashboard().unwrap();
        assert_eq!(dashboard.tips, vec![Tip::HighSavings]);
    }

    #[test]
    fn test_budget_plan_deficit() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        save_profile(&storage, 3_000_000);
        add_expense(&storage, ExpenseCategory::Housing, 2_500_000);
        add_expense(&storage, ExpenseCategory::Traveling, 1_000_000);

        let plan = ReportService::new(&storage, &settings).budget_plan().unwrap();
        assert!(plan.deficit);
        assert_eq!(plan.needs.fraction, 1.0);
        assert_eq!(plan.savings.fraction, 0.0);
        assert!(plan.wants.is_over());
    }

    #[test]
    fn test_goal_overview() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        save_profile(&storage, 5_000_000);
        add_expense(&storage, ExpenseCategory::Housing, 4_000_000);

        let goals = GoalService::new(&storage);
        goals
            .create("Dana Darurat", Money::from_units(3_000_000), None)
            .unwrap();
        goals
            .update_progress("Dana Darurat", Money::from_units(1_000_000))
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let overview = ReportService::new(&storage, &settings)
            .goal_overview(today)
            .unwrap();

        assert_eq!(overview.len(), 1);
        assert!((overview[0].progress_percentage - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(overview[0].timeline.months_needed(), 2.0);
    }
}
