//! CSV export
//!
//! Writes expenses in a spreadsheet-friendly layout. Amounts are written in
//! currency units with two decimals so no precision is lost.

use std::io::Write;

use crate::analysis::classify;
use crate::error::FinanceResult;
use crate::models::Expense;

const EXPENSE_HEADER: [&str; 6] = ["ID", "Date", "Category", "Type", "Amount", "Note"];

/// Export the given expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> FinanceResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(EXPENSE_HEADER)?;

    for expense in expenses {
        wtr.write_record([
            expense.id.as_uuid().to_string(),
            expense.date.to_string(),
            expense.category.clone(),
            classify(&expense.category).to_string(),
            format!("{:.2}", expense.amount.as_f64()),
            expense.note.clone(),
        ])?;
    }

    wtr.flush()?;
    tracing::debug!(rows = expenses.len(), "exported expenses to csv");
    Ok(())
}
