//! Profile repository for JSON storage
//!
//! Holds the single user profile in profile.json. An absent file or a `null`
//! document both mean "no profile yet".

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::UserProfile;

use super::file_io::{read_json, write_json_atomic};

pub struct ProfileRepository {
    path: PathBuf,
    data: RwLock<Option<UserProfile>>,
}

impl ProfileRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(None),
        }
    }

    pub fn load(&self) -> Result<(), FinanceError> {
        let profile: Option<UserProfile> = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = profile;

        Ok(())
    }

    pub fn save(&self) -> Result<(), FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)
    }

    pub fn get(&self) -> Result<Option<UserProfile>, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Replace the stored profile, returning the previous one
    pub fn set(&self, profile: UserProfile) -> Result<Option<UserProfile>, FinanceError> {
        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.replace(profile))
    }

    pub fn exists(&self) -> Result<bool, FinanceError> {
        Ok(self.get()?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_empty_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ProfileRepository::new(temp_dir.path().join("profile.json"));
        repo.load().unwrap();

        assert!(!repo.exists().unwrap());
    }

    #[test]
    fn test_set_replaces_and_returns_previous() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ProfileRepository::new(temp_dir.path().join("profile.json"));
        repo.load().unwrap();

        assert!(repo
            .set(UserProfile::new("Ani", Money::from_units(8_000_000)))
            .unwrap()
            .is_none());

        let previous = repo
            .set(UserProfile::new("Ani", Money::from_units(9_000_000)))
            .unwrap()
            .unwrap();
        assert_eq!(previous.monthly_income, Money::from_units(8_000_000));
        assert_eq!(
            repo.get().unwrap().unwrap().monthly_income,
            Money::from_units(9_000_000)
        );
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");
        let repo = ProfileRepository::new(path.clone());
        repo.load().unwrap();
        repo.set(UserProfile::new("Budi", Money::from_units(12_500_000)))
            .unwrap();
        repo.save().unwrap();

        let repo2 = ProfileRepository::new(path);
        repo2.load().unwrap();
        let profile = repo2.get().unwrap().unwrap();
        assert_eq!(profile.name, "Budi");
        assert_eq!(profile.monthly_income, Money::from_units(12_500_000));
    }
}
