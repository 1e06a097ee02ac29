//! JSON export
//!
//! Exports the profile, expenses and goals as one versioned document.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Expense, Money, SavingsGoal, UserProfile};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub profile: Option<UserProfile>,

    pub expenses: Vec<Expense>,

    pub goals: Vec<SavingsGoal>,

    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    pub goal_count: usize,

    /// Sum of all exported expenses
    pub total_expenses: Money,

    pub earliest_expense: Option<String>,

    pub latest_expense: Option<String>,
}

impl FullExport {
    pub fn from_storage(storage: &Storage) -> FinanceResult<Self> {
        let profile = storage.profile.get()?;
        let expenses = storage.expenses.get_all()?;
        let goals = storage.goals.get_all()?;

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            goal_count: goals.len(),
            total_expenses: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            profile,
            expenses,
            goals,
            metadata,
        })
    }

    /// Check version and internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.expense_count != self.expenses.len() {
            return Err(format!(
                "Expense count mismatch: metadata says {}, found {}",
                self.metadata.expense_count,
                self.expenses.len()
            ));
        }

        if self.metadata.goal_count != self.goals.len() {
            return Err(format!(
                "Goal count mismatch: metadata says {}, found {}",
                self.metadata.goal_count,
                self.goals.len()
            ));
        }

        if let Some(bad) = self.expenses.iter().find(|e| e.validate().is_err()) {
            return Err(format!("Invalid expense {}", bad.id));
        }

        Ok(())
    }
}

/// Export everything to pretty-printed JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> FinanceResult<()> {
    let export = FullExport::from_storage(storage)?;

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::ExpenseCategory;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn populated_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();

        storage
            .profile
            .set(UserProfile::new("Wati", Money::from_units(9_000_000)))
            .unwrap();
        for (day, units) in [(3, 100_000), (21, 250_000)] {
            storage
                .expenses
                .upsert(Expense::new(
                    NaiveDate::from_ymd_opt(2025, 9, day).unwrap(),
                    ExpenseCategory::FoodAndDrink,
                    Money::from_units(units),
                ))
                .unwrap();
        }
        storage
            .goals
            .upsert(SavingsGoal::new("Umroh", Money::from_units(35_000_000), None))
            .unwrap();

        (temp_dir, storage)
    }

    #[test]
    fn test_full_export_metadata() {
        let (_temp_dir, storage) = populated_storage();
        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.expense_count, 2);
        assert_eq!(export.metadata.goal_count, 1);
        assert_eq!(export.metadata.total_expenses, Money::from_units(350_000));
        assert_eq!(export.metadata.earliest_expense.as_deref(), Some("2025-09-03"));
        assert_eq!(export.metadata.latest_expense.as_deref(), Some("2025-09-21"));
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_output_parses_back() {
        let (_temp_dir, storage) = populated_storage();
        let mut buffer = Vec::new();
        export_full_json(&storage, &mut buffer).unwrap();

        let parsed: FullExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.profile.unwrap().name, "Wati");
        assert_eq!(parsed.expenses.len(), 2);
    }

    #[test]
    fn test_validate_rejects_wrong_version() {
        let (_temp_dir, storage) = populated_storage();
        let mut export = FullExport::from_storage(&storage).unwrap();
        export.schema_version = "0.1.0".into();

        assert!(export.validate().unwrap_err().contains("Schema version mismatch"));
    }
}
