//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::FinanceError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Newest first: by date, then by creation time
fn newest_first(a: &Expense, b: &Expense) -> std::cmp::Ordering {
    b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at))
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), FinanceError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        tracing::debug!(count = data.len(), "loaded expenses");
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(newest_first);

        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Find an expense by full ID or short prefix
    pub fn find(&self, identifier: &str) -> Result<Option<Expense>, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.values().find(|e| e.id.matches(identifier)).cloned())
    }

    /// Get all expenses, newest first
    pub fn get_all(&self) -> Result<Vec<Expense>, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(newest_first);
        Ok(expenses)
    }

    /// Get expenses dated within `start..=end`, newest first
    pub fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>, FinanceError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect())
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), FinanceError> {
        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense, returning whether it existed
    pub fn delete(&self, id: ExpenseId) -> Result<bool, FinanceError> {
        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(&id).is_some())
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn expense_on(day: u32, units: i64) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            ExpenseCategory::FoodAndDrink,
            Money::from_units(units),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let expense = expense_on(5, 25_000);
        let id = expense.id;
        repo.upsert(expense).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount, Money::from_units(25_000));
    }

    #[test]
    fn test_get_all_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(expense_on(3, 100)).unwrap();
        repo.upsert(expense_on(20, 200)).unwrap();
        repo.upsert(expense_on(11, 300)).unwrap();

        let days: Vec<_> = repo
            .get_all()
            .unwrap()
            .iter()
            .map(|e| e.date.format("%d").to_string())
            .collect();
        assert_eq!(days, vec!["20", "11", "03"]);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let expense = expense_on(5, 25_000);
        let id = expense.id;
        repo.upsert(expense).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        assert!(repo2.get(id).unwrap().is_some());
    }

    #[test]
    fn test_find_by_short_id() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let expense = expense_on(5, 25_000);
        let short = expense.id.to_string();
        repo.upsert(expense.clone()).unwrap();

        assert_eq!(repo.find(&short).unwrap().unwrap().id, expense.id);
        assert!(repo.find("exp-ffff").unwrap().is_none());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let expense = expense_on(5, 25_000);
        let id = expense.id;
        repo.upsert(expense).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(expense_on(1, 100)).unwrap();
        repo.upsert(expense_on(15, 200)).unwrap();
        repo.upsert(expense_on(31, 300)).unwrap();

        let range = repo
            .get_by_date_range(
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            )
            .unwrap();

        assert_eq!(range.len(), 2);
        assert_eq!(range[0].amount, Money::from_units(200));
        assert_eq!(range[1].amount, Money::from_units(100));
    }
}
