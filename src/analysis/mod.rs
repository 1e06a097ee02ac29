//! Financial analysis
//!
//! Pure functions over expenses and income: classification into the
//! 50/30/20 buckets, spending aggregation, health scoring, savings
//! projections and tips. Nothing here touches storage.

pub mod budget_rule;
pub mod classifier;
pub mod health;
pub mod spending;
pub mod timeline;
pub mod tips;

pub use budget_rule::IdealBudget;
pub use classifier::{categories_of, classify, spending_type_of, CATEGORY_GROUPS};
pub use health::{financial_health_score, HealthGrade, HealthScore};
pub use spending::{analyze_spending, AnalysisResult, BudgetProgress};
pub use timeline::{calculate_savings_timeline, SavingsTimeline};
pub use tips::{financial_tips, Tip};
