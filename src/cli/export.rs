//! CLI commands for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Subcommand, ValueEnum};

use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml, FullExport};
use crate::services::{ExpenseFilter, ExpenseService, MonthWindow};
use crate::storage::Storage;

/// Format for the full export
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON (machine-readable)
    Json,
    /// YAML (human-readable)
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export expenses to CSV
    Expenses {
        /// Output file path
        output: PathBuf,
        /// Month window: all, this-month, last-month
        #[arg(short, long, default_value = "all")]
        period: MonthWindow,
    },

    /// Export the profile, expenses and goals
    All {
        /// Output file path
        output: PathBuf,

        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },
}

fn create_output(output: &Path) -> FinanceResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        FinanceError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FinanceResult<()> {
    match cmd {
        ExportCommands::Expenses { output, period } => {
            let today = Local::now().date_naive();
            let expenses =
                ExpenseService::new(storage).list(ExpenseFilter::new().window(period, today))?;

            let mut writer = create_output(&output)?;
            export_expenses_csv(&expenses, &mut writer)?;
            writer.flush()?;

            println!(
                "Exported {} expenses to: {}",
                expenses.len(),
                output.display()
            );
        }

        ExportCommands::All { output, format } => {
            let mut writer = create_output(&output)?;
            match format {
                ExportFormat::Json => export_full_json(storage, &mut writer)?,
                ExportFormat::Yaml => export_full_yaml(storage, &mut writer)?,
            }
            writer.flush()?;

            let summary = FullExport::from_storage(storage)?;
            println!("Full data exported to: {}", output.display());
            println!("  Profile:  {}", if summary.profile.is_some() { "yes" } else { "no" });
            println!("  Expenses: {}", summary.metadata.expense_count);
            println!("  Goals:    {}", summary.metadata.goal_count);
        }
    }

    Ok(())
}
