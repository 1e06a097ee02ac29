//! Savings goal display formatting

use crate::models::{CurrencyFormat, SavingsGoal};
use crate::services::GoalProgress;

use super::report::{format_bar, separator};

const BAR_WIDTH: usize = 20;

/// Progress bar and "saved / target (pct)" line for a goal
pub fn format_goal_progress_line(goal: &SavingsGoal, format: &CurrencyFormat) -> String {
    let pct = goal.progress_percentage();
    format!(
        "{} {} / {} ({:.1}%)",
        format_bar(goal.progress_fraction(), 1.0, BAR_WIDTH),
        format.format(goal.current_amount),
        format.format(goal.target_amount),
        pct
    )
}

/// One block per goal with progress and the projected completion
pub fn format_goal_overview(goals: &[GoalProgress], format: &CurrencyFormat) -> String {
    if goals.is_empty() {
        return "No savings goals yet. Add one with 'fintrack goal add'.\n".to_string();
    }

    let mut output = String::new();
    for entry in goals {
        let goal = &entry.goal;
        output.push_str(&format!("🎯 {}  [{}]\n", goal.name, goal.id));
        output.push_str(&format!(
            "   {}\n",
            format_goal_progress_line(goal, format)
        ));
        if let Some(deadline) = goal.deadline {
            output.push_str(&format!("   Deadline: {}\n", deadline.format("%Y-%m-%d")));
        }
        output.push_str(&format!(
            "   📅 Estimated completion: {}\n",
            entry.timeline.estimated_completion()
        ));
        if entry.timeline.is_achievable() && entry.timeline.months_needed() > 0.0 {
            output.push_str(&format!(
                "   {:.1} months to go\n",
                entry.timeline.months_needed()
            ));
        }
        output.push_str(&separator(50));
        output.push('\n');
    }

    output
}

pub fn format_goal_details(goal: &SavingsGoal, format: &CurrencyFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!("Goal:      {} [{}]\n", goal.name, goal.id));
    output.push_str(&format!("Target:    {}\n", format.format(goal.target_amount)));
    output.push_str(&format!("Saved:     {}\n", format.format(goal.current_amount)));
    output.push_str(&format!("Remaining: {}\n", format.format(goal.remaining())));
    output.push_str(&format!("Progress:  {:.1}%\n", goal.progress_percentage()));
    if let Some(deadline) = goal.deadline {
        output.push_str(&format!("Deadline:  {}\n", deadline.format("%Y-%m-%d")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SavingsTimeline;
    use crate::models::Money;

    #[test]
    fn test_progress_line_clamps_bar() {
        let mut goal = SavingsGoal::new("HP", Money::from_units(1_000_000), None);
        goal.set_current_amount(Money::from_units(1_500_000));

        let line = format_goal_progress_line(&goal, &CurrencyFormat::default());
        assert!(line.contains("Rp 1.500.000 / Rp 1.000.000 (150.0%)"));
        assert_eq!(line.chars().filter(|c| *c == '█').count(), BAR_WIDTH);
    }

    #[test]
    fn test_overview_not_achievable() {
        let goal = SavingsGoal::new("Rumah", Money::from_units(100_000_000), None);
        let overview = vec![GoalProgress {
            progress_percentage: 0.0,
            timeline: SavingsTimeline::NotAchievable,
            goal,
        }];

        let output = format_goal_overview(&overview, &CurrencyFormat::default());
        assert!(output.contains("Rumah"));
        assert!(output.contains("Never (no savings)"));
        assert!(!output.contains("months to go"));
    }

    #[test]
    fn test_empty_overview() {
        let output = format_goal_overview(&[], &CurrencyFormat::default());
        assert!(output.starts_with("No savings goals yet"));
    }
}
