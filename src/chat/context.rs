//! Financial context for the chat assistant
//!
//! Renders the user's profile, spending summary, top categories and goals as
//! plain text that is prepended to each question.

use std::fmt;

use crate::analysis::AnalysisResult;
use crate::models::{CurrencyFormat, Money, SavingsGoal, UserProfile};

/// Number of categories listed under "Top Expense Categories"
pub const TOP_CATEGORY_COUNT: usize = 3;

/// Rendered financial context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialContext {
    text: String,
}

impl FinancialContext {
    pub fn build(
        profile: &UserProfile,
        analysis: &AnalysisResult,
        goals: &[SavingsGoal],
        format: &CurrencyFormat,
    ) -> Self {
        let money = |amount: Money| format.format(amount);
        let mut lines = vec![
            "User Profile:".to_string(),
            format!("- Name: {}", profile.name),
            format!("- Monthly Income: {}", money(profile.monthly_income)),
            format!("- Status: {}", profile.status),
            String::new(),
            "Financial Summary:".to_string(),
            format!("- Total Expenses: {}", money(analysis.total_expenses)),
            format!("- Current Savings: {}", money(analysis.actual_savings)),
            format!("- Savings Rate: {:.1}%", analysis.savings_percentage),
            format!(
                "- Needs Spending: {} ({:.1}%)",
                money(analysis.needs_total),
                analysis.needs_percentage
            ),
            format!(
                "- Wants Spending: {} ({:.1}%)",
                money(analysis.wants_total),
                analysis.wants_percentage
            ),
            String::new(),
            "Top Expense Categories:".to_string(),
        ];

        for (label, amount) in analysis.top_categories(TOP_CATEGORY_COUNT) {
            lines.push(format!("- {}: {}", label, money(amount)));
        }

        if !goals.is_empty() {
            lines.push(String::new());
            lines.push("Savings Goals:".to_string());
            for goal in goals {
                lines.push(format!(
                    "- {}: {} / {}",
                    goal.name,
                    money(goal.current_amount),
                    money(goal.target_amount)
                ));
            }
        }

        Self {
            text: lines.join("\n"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for FinancialContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The text actually sent to the assistant
///
/// Without a context the question goes through unchanged.
pub fn compose_prompt(context: Option<&FinancialContext>, question: &str) -> String {
    match context {
        Some(context) => format!(
            "[User's financial context: {}]\n\nUser question: {}",
            context, question
        ),
        None => question.to_string(),
    }
}
