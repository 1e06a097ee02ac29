//! Expense display formatting
//!
//! Register rows, details, per-category summaries and the category list.

use crate::analysis::spending_type_of;
use crate::models::{CurrencyFormat, Expense, ExpenseCategory, Money};
use crate::services::ExpenseService;

use super::report::{separator, truncate};

const CATEGORY_WIDTH: usize = 28;
const NOTE_WIDTH: usize = 24;

/// One register row: short id, date, category, amount and note
pub fn format_expense_row(expense: &Expense, format: &CurrencyFormat, date_format: &str) -> String {
    format!(
        "{:12} {:10} {:width$} {:>16}  {}",
        expense.id.to_string(),
        expense.date.format(date_format).to_string(),
        truncate(&expense.category, CATEGORY_WIDTH),
        format.format(expense.amount),
        truncate(&expense.note, NOTE_WIDTH),
        width = CATEGORY_WIDTH
    )
}

/// Expense register with a total line
pub fn format_expense_list(
    expenses: &[Expense],
    format: &CurrencyFormat,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:width$} {:>16}  {}\n",
        "ID",
        "Date",
        "Category",
        "Amount",
        "Note",
        width = CATEGORY_WIDTH
    ));
    output.push_str(&separator(90));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, format, date_format));
        output.push('\n');
    }

    output.push_str(&separator(90));
    output.push('\n');
    output.push_str(&format!(
        "Total: {} ({} expense{})\n",
        format.format(ExpenseService::total(expenses)),
        expenses.len(),
        if expenses.len() == 1 { "" } else { "s" }
    ));

    output
}

pub fn format_expense_details(
    expense: &Expense,
    format: &CurrencyFormat,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Date:     {}\n", expense.date.format(date_format)));
    output.push_str(&format!("Category: {}\n", expense.category));
    output.push_str(&format!("Amount:   {}\n", format.format(expense.amount)));
    if expense.note.is_empty() {
        output.push_str("Note:     (no note)\n");
    } else {
        output.push_str(&format!("Note:     {}\n", expense.note));
    }

    output
}

/// Per-category totals, largest first, with a share column
pub fn format_category_summary(rows: &[(String, Money)], format: &CurrencyFormat) -> String {
    if rows.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let total: Money = rows.iter().map(|(_, amount)| *amount).sum();

    let mut output = String::new();
    output.push_str(&format!(
        "{:width$} {:>16} {:>7}\n",
        "Category",
        "Amount",
        "Share",
        width = CATEGORY_WIDTH
    ));
    output.push_str(&separator(CATEGORY_WIDTH + 25));
    output.push('\n');

    for (label, amount) in rows {
        output.push_str(&format!(
            "{:width$} {:>16} {:>6.1}%\n",
            truncate(label, CATEGORY_WIDTH),
            format.format(*amount),
            amount.percentage_of(total),
            width = CATEGORY_WIDTH
        ));
    }

    output.push_str(&separator(CATEGORY_WIDTH + 25));
    output.push('\n');
    output.push_str(&format!(
        "{:width$} {:>16}\n",
        "Total",
        format.format(total),
        width = CATEGORY_WIDTH
    ));

    output
}

/// Every known category with its key and spending type
pub fn format_category_list() -> String {
    let mut output = String::new();
    output.push_str(&format!("{:16} {:34} {}\n", "Key", "Category", "Type"));
    output.push_str(&separator(58));
    output.push('\n');

    for category in ExpenseCategory::all() {
        output.push_str(&format!(
            "{:16} {:34} {}\n",
            category.key(),
            category.label(),
            spending_type_of(*category)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Expense {
        Expense::with_note(
            NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            ExpenseCategory::Transportation,
            Money::from_units(45_000),
            "Ojek ke kantor",
        )
    }

    #[test]
    fn test_row_contains_fields() {
        let row = format_expense_row(&sample(), &CurrencyFormat::default(), "%d/%m/%Y");
        assert!(row.contains("02/05/2025"));
        assert!(row.contains("Transportasi"));
        assert!(row.contains("Rp 45.000"));
        assert!(row.contains("Ojek ke kantor"));
    }

    #[test]
    fn test_list_total() {
        let expenses = vec![sample(), sample()];
        let output = format_expense_list(&expenses, &CurrencyFormat::default(), "%Y-%m-%d");
        assert!(output.contains("Total: Rp 90.000 (2 expenses)"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_expense_list(&[], &CurrencyFormat::default(), "%Y-%m-%d"),
            "No expenses recorded yet.\n"
        );
    }

    #[test]
    fn test_category_summary_shares() {
        let rows = vec![
            ("Hiburan".to_string(), Money::from_units(300)),
            ("Kesehatan".to_string(), Money::from_units(100)),
        ];
        let output = format_category_summary(&rows, &CurrencyFormat::default());
        assert!(output.contains("75.0%"));
        assert!(output.contains("25.0%"));
        assert!(output.contains("Rp 400"));
    }

    #[test]
    fn test_category_list_shows_types() {
        let output = format_category_list();
        assert!(output.contains("Makanan & Minuman"));
        assert!(output.contains("Needs"));
        assert!(output.contains("Wants"));
    }
}
