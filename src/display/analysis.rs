//! Dashboard, budget, health and tip formatting

use crate::analysis::{AnalysisResult, BudgetProgress, HealthScore, Tip};
use crate::analysis::health::{
    EXPENSE_CONTROL_COMPONENT_MAX, NEEDS_COMPONENT_MAX, SAVINGS_COMPONENT_MAX,
};
use crate::models::CurrencyFormat;
use crate::services::{BudgetPlan, Dashboard};

use super::report::{double_separator, format_bar, format_percentage, separator, truncate};

const WIDTH: usize = 56;
const BAR_WIDTH: usize = 24;
const TOP_CATEGORIES: usize = 5;

fn metric(label: &str, value: &str) -> String {
    format!("{:22} {}\n", label, value)
}

/// Summary metrics, top categories, budget and tips
pub fn format_dashboard(dashboard: &Dashboard, format: &CurrencyFormat) -> String {
    let mut output = String::new();
    let analysis = &dashboard.analysis;

    output.push_str(&format!("Dashboard for {}\n", dashboard.profile.name));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    output.push_str(&metric(
        "💵 Monthly Income",
        &format.format(dashboard.profile.monthly_income),
    ));

    if !dashboard.has_expenses() {
        output.push('\n');
        output.push_str(
            "📝 No expenses recorded yet. Start with 'fintrack expense add'.\n",
        );
        return output;
    }

    output.push_str(&metric(
        "💸 Total Expenses",
        &format.format(analysis.total_expenses),
    ));
    output.push_str(&metric(
        "💰 Current Savings",
        &format!(
            "{} ({})",
            format.format(analysis.actual_savings),
            format_percentage(analysis.savings_percentage)
        ),
    ));
    output.push_str(&metric(
        &format!("{} Health Score", dashboard.health.indicator()),
        &format!("{}/100 ({})", dashboard.health.score, dashboard.health.grade),
    ));
    output.push('\n');

    output.push_str(&format_expense_breakdown(analysis, format));
    output.push('\n');
    output.push_str(&format_budget_table(analysis, format));
    output.push('\n');
    output.push_str(&format_tips(&dashboard.tips, format));

    output
}

/// Largest categories with a bar scaled to the biggest one
pub fn format_expense_breakdown(analysis: &AnalysisResult, format: &CurrencyFormat) -> String {
    let mut output = String::from("📊 Expense Breakdown\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    let rows = analysis.top_categories(TOP_CATEGORIES);
    let max = rows.first().map(|(_, amount)| amount.as_f64()).unwrap_or(0.0);

    for (label, amount) in rows {
        output.push_str(&format!(
            "{:24} {:>14} {}\n",
            truncate(label, 24),
            format.format(amount),
            format_bar(amount.as_f64(), max, 12)
        ));
    }

    output
}

/// Ideal vs actual per bucket
pub fn format_budget_table(analysis: &AnalysisResult, format: &CurrencyFormat) -> String {
    let mut output = String::from("🎯 Budget vs Actual\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:10} {:>14} {:>14} {:>14}\n",
        "", "Ideal", "Actual", "Difference"
    ));

    let rows = [
        ("Needs", analysis.needs_progress()),
        ("Wants", analysis.wants_progress()),
        ("Savings", analysis.savings_progress()),
    ];
    for (label, progress) in rows {
        output.push_str(&format!(
            "{:10} {:>14} {:>14} {:>14}\n",
            label,
            format.format(progress.ideal),
            format.format(progress.actual),
            format.format(progress.difference)
        ));
    }

    output
}

/// Words for a bucket above and below its ideal amount
const SPENDING_WORDS: (&str, &str) = ("over by", "under by");
const SAVINGS_WORDS: (&str, &str) = ("ahead by", "short by");

fn format_bucket(
    title: &str,
    progress: &BudgetProgress,
    (above, below): (&str, &str),
    format: &CurrencyFormat,
) -> String {
    let mut output = format!("{}  ideal {}\n", title, format.format(progress.ideal));
    output.push_str(&format!(
        "   {} {}\n",
        format_bar(progress.fraction, 1.0, BAR_WIDTH),
        format.format(progress.actual)
    ));

    let difference = progress.difference;
    let note = if progress.is_over() {
        format!("   {} {}\n", above, format.format(difference))
    } else if difference.is_negative() {
        format!("   {} {}\n", below, format.format(difference.abs()))
    } else {
        "   on target\n".to_string()
    };
    output.push_str(&note);
    output
}

/// The 50/30/20 plan with a progress bar per bucket
pub fn format_budget_plan(plan: &BudgetPlan, format: &CurrencyFormat) -> String {
    let mut output = String::from("50/30/20 Budget Plan\n");
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    output.push_str(&format_bucket("🏠 Needs (50%)", &plan.needs, SPENDING_WORDS, format));
    output.push_str(&format_bucket("🎉 Wants (30%)", &plan.wants, SPENDING_WORDS, format));
    output.push_str(&format_bucket("💎 Savings (20%)", &plan.savings, SAVINGS_WORDS, format));

    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Needs {}  Wants {}  Savings {}\n",
        format_percentage(plan.analysis.needs_percentage),
        format_percentage(plan.analysis.wants_percentage),
        format_percentage(plan.analysis.savings_percentage)
    ));

    if plan.deficit {
        output.push_str("⚠️  Deficit detected! Expenses exceed income.\n");
    }

    output
}

/// Score, grade and the three components
pub fn format_health(health: &HealthScore) -> String {
    let mut output = format!(
        "{} Financial Health Score: {}/100\n",
        health.indicator(),
        health.score
    );
    output.push_str(&format!("Grade: {}\n", health.grade));
    output.push_str(&separator(40));
    output.push('\n');

    let components = [
        ("Savings rate", health.savings_component, SAVINGS_COMPONENT_MAX),
        ("Needs ratio", health.needs_component, NEEDS_COMPONENT_MAX),
        (
            "Expense control",
            health.expense_control_component,
            EXPENSE_CONTROL_COMPONENT_MAX,
        ),
    ];
    for (label, points, max) in components {
        output.push_str(&format!(
            "{:16} {:>4.0}/{:<3.0} {}\n",
            label,
            points,
            max,
            format_bar(points, max, 10)
        ));
    }

    output
}

pub fn format_tips(tips: &[Tip], format: &CurrencyFormat) -> String {
    let mut output = String::from("💡 Personalized Financial Tips\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    for tip in tips {
        output.push_str(&tip.render(format));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_spending, financial_health_score, financial_tips};
    use crate::models::{Expense, ExpenseCategory, Money, UserProfile};
    use chrono::NaiveDate;

    fn analysis() -> AnalysisResult {
        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let expenses = vec![
            Expense::new(date, ExpenseCategory::Housing, Money::from_units(6_000_000)),
            Expense::new(date, ExpenseCategory::Hobbies, Money::from_units(5_000_000)),
        ];
        analyze_spending(&expenses, Money::from_units(10_000_000))
    }

    #[test]
    fn test_dashboard_without_expenses() {
        let empty = analyze_spending(&[], Money::from_units(10_000_000));
        let dashboard = Dashboard {
            profile: UserProfile::new("Sari", Money::from_units(10_000_000)),
            expense_count: 0,
            health: financial_health_score(&empty),
            tips: Vec::new(),
            analysis: empty,
        };

        let output = format_dashboard(&dashboard, &CurrencyFormat::default());
        assert!(output.contains("Rp 10.000.000"));
        assert!(output.contains("No expenses recorded yet"));
        assert!(!output.contains("Health Score"));
    }

    #[test]
    fn test_budget_plan_deficit_warning() {
        let analysis = analysis();
        let plan = BudgetPlan {
            needs: analysis.needs_progress(),
            wants: analysis.wants_progress(),
            savings: analysis.savings_progress(),
            deficit: analysis.is_deficit(),
            analysis,
        };

        let output = format_budget_plan(&plan, &CurrencyFormat::default());
        assert!(output.contains("over by Rp 1.000.000"));
        assert!(output.contains("over by Rp 2.000.000"));
        assert!(output.contains("Deficit detected"));
        assert!(output.contains("short by Rp 3.000.000"));
        assert!(!output.contains("over by Rp 3.000.000"));
    }

    #[test]
    fn test_savings_above_ideal_reads_ahead() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let expenses = vec![Expense::new(
            date,
            ExpenseCategory::Housing,
            Money::from_units(4_000_000),
        )];
        let analysis = analyze_spending(&expenses, Money::from_units(10_000_000));
        let plan = BudgetPlan {
            needs: analysis.needs_progress(),
            wants: analysis.wants_progress(),
            savings: analysis.savings_progress(),
            deficit: analysis.is_deficit(),
            analysis,
        };

        let output = format_budget_plan(&plan, &CurrencyFormat::default());
        assert!(output.contains("ahead by Rp 4.000.000"));
        assert!(output.contains("under by Rp 1.000.000"));
        assert!(!output.contains("over by"));
        assert!(!output.contains("short by"));
    }

    #[test]
    fn test_health_components() {
        let output = format_health(&financial_health_score(&analysis()));
        assert!(output.contains("Savings rate"));
        assert!(output.contains("/100"));
    }

    #[test]
    fn test_tips_rendered_in_order() {
        let analysis = analysis();
        let tips = financial_tips(&analysis, Money::from_units(1_000_000));
        let output = format_tips(&tips, &CurrencyFormat::default());

        let low = output.find("💡 Savings:").unwrap();
        let needs = output.find("Rp 1.000.000").unwrap();
        assert!(low < needs);
    }
}
