//! Storage layer for fintrack
//!
//! One JSON file per entity set, written atomically, plus the append-only
//! audit log. Services borrow a [`Storage`] and never touch files directly.

pub mod expenses;
pub mod file_io;
pub mod goals;
pub mod init;
pub mod profile;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use init::initialize_storage;
pub use profile::ProfileRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::FintrackPaths;
use crate::error::FinanceError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FintrackPaths,
    pub profile: ProfileRepository,
    pub expenses: ExpenseRepository,
    pub goals: GoalRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance without loading any data
    pub fn new(paths: FintrackPaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            profile: ProfileRepository::new(paths.profile_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            goals: GoalRepository::new(paths.goals_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Create a Storage instance and load everything from disk
    pub fn open(paths: FintrackPaths) -> Result<Self, FinanceError> {
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), FinanceError> {
        self.profile.load()?;
        self.expenses.load()?;
        self.goals.load()?;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), FinanceError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), FinanceError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), FinanceError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}
