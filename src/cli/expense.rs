//! Expense CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_category_list, format_category_summary, format_expense_details, format_expense_list,
};
use crate::error::{FinanceError, FinanceResult};
use crate::models::ExpenseCategory;
use crate::services::{CreateExpenseInput, ExpenseFilter, ExpenseService, MonthWindow};
use crate::storage::Storage;

use super::parse_money;

#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount (e.g., "150000" or "150,000")
        amount: String,
        /// Category label or key (see 'fintrack expense categories')
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List expenses, newest first
    List {
        /// Filter by category label or key
        #[arg(short, long)]
        category: Option<String>,
        /// Month window: all, this-month, last-month
        #[arg(short, long, default_value = "all")]
        period: MonthWindow,
        /// Start date (YYYY-MM-DD); with --from or --to, --period is ignored
        #[arg(long)]
        from: Option<NaiveDate>,
        /// End date (YYYY-MM-DD); with --from or --to, --period is ignored
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID (at least the first 8 characters)
        id: String,
    },
    /// Totals per category
    Summary {
        /// Month window: all, this-month, last-month
        #[arg(short, long, default_value = "all")]
        period: MonthWindow,
    },
    /// List the available categories
    Categories,
}

fn parse_category(value: &str) -> FinanceResult<ExpenseCategory> {
    value.parse().map_err(FinanceError::Validation)
}

/// Date bounds for `expense list`
///
/// An explicit range replaces the month window entirely, so a missing
/// `--from` or `--to` leaves that side open.
fn list_date_filter(
    period: MonthWindow,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> ExpenseFilter {
    if from.is_none() && to.is_none() {
        return ExpenseFilter::new().window(period, today);
    }

    let mut filter = ExpenseFilter::new();
    if let Some(from) = from {
        filter = filter.since(from);
    }
    if let Some(to) = to {
        filter = filter.until(to);
    }
    filter
}

pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FinanceResult<()> {
    let service = ExpenseService::new(storage);
    let format = settings.currency_format();
    let today = Local::now().date_naive();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            note,
        } => {
            let expense = service.create(CreateExpenseInput {
                date,
                category: parse_category(&category)?,
                amount: parse_money(&amount, "amount")?,
                note,
            })?;

            println!(
                "✅ Expense added: {} for {}",
                format.format(expense.amount),
                expense.category
            );
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List {
            category,
            period,
            from,
            to,
            limit,
        } => {
            let mut filter = list_date_filter(period, from, to, today);
            if let Some(category) = category {
                filter = filter.category(parse_category(&category)?);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let expenses = service.list(filter)?;
            print!("{}", format_expense_list(&expenses, &format, &settings.date_format));
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.delete(&id)?;
            println!("Expense deleted:");
            print!("{}", format_expense_details(&expense, &format, &settings.date_format));
        }

        ExpenseCommands::Summary { period } => {
            let rows = service.summary_by_category(ExpenseFilter::new().window(period, today))?;
            print!("{}", format_category_summary(&rows, &format));
        }

        ExpenseCommands::Categories => {
            print!("{}", format_category_list());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_applies_without_range() {
        let filter = list_date_filter(MonthWindow::LastMonth, None, None, date(2025, 3, 15));
        assert_eq!(filter.start_date, Some(date(2025, 2, 1)));
        assert_eq!(filter.end_date, Some(date(2025, 2, 28)));
    }

    #[test]
    fn test_from_alone_clears_period_end() {
        let filter = list_date_filter(
            MonthWindow::LastMonth,
            Some(date(2025, 1, 10)),
            None,
            date(2025, 3, 15),
        );
        assert_eq!(filter.start_date, Some(date(2025, 1, 10)));
        assert_eq!(filter.end_date, None);
    }

    #[test]
    fn test_to_alone_clears_period_start() {
        let filter = list_date_filter(
            MonthWindow::ThisMonth,
            None,
            Some(date(2025, 1, 31)),
            date(2025, 3, 15),
        );
        assert_eq!(filter.start_date, None);
        assert_eq!(filter.end_date, Some(date(2025, 1, 31)));
    }
}
