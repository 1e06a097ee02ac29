//! Savings goal repository for JSON storage
//!
//! Manages loading and saving goals to goals.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{GoalId, SavingsGoal};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    goals: Vec<SavingsGoal>,
}

/// Repository for savings goal persistence
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<HashMap<GoalId, SavingsGoal>>,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), FinanceError> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for goal in file_data.goals {
            data.insert(goal.id, goal);
        }

        tracing::debug!(count = data.len(), "loaded savings goals");
        Ok(())
    }

    pub fn save(&self) -> Result<(), FinanceError> {
        let goals = self.get_all()?;
        write_json_atomic(&self.path, &GoalData { goals })
    }

    pub fn get(&self, id: GoalId) -> Result<Option<SavingsGoal>, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Find a goal by ID prefix, or by exact name (case-insensitive)
    pub fn find(&self, identifier: &str) -> Result<Option<SavingsGoal>, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        if let Some(goal) = data.values().find(|g| g.id.matches(identifier)) {
            return Ok(Some(goal.clone()));
        }

        let needle = identifier.trim().to_lowercase();
        Ok(data
            .values()
            .find(|g| g.name.to_lowercase() == needle)
            .cloned())
    }

    /// Get all goals, newest first
    pub fn get_all(&self) -> Result<Vec<SavingsGoal>, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut goals: Vec<_> = data.values().cloned().collect();
        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(goals)
    }

    /// Active goals only, newest first
    pub fn get_active(&self) -> Result<Vec<SavingsGoal>, FinanceError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|g| g.is_active())
            .collect())
    }

    pub fn upsert(&self, goal: SavingsGoal) -> Result<(), FinanceError> {
        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(goal.id, goal);
        Ok(())
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
