//! Storage initialization
//!
//! Handles first-run setup: directories, default settings and empty data
//! files. Existing files are never overwritten.

use crate::config::paths::FintrackPaths;
use crate::config::settings::Settings;
use crate::error::FinanceError;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
pub fn initialize_storage(paths: &FintrackPaths) -> Result<(), FinanceError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
        tracing::info!(path = %paths.settings_file().display(), "created default settings");
    }

    if !paths.expenses_file().exists() {
        write_json_atomic(
            paths.expenses_file(),
            &serde_json::json!({ "expenses": [] }),
        )?;
    }

    if !paths.goals_file().exists() {
        write_json_atomic(paths.goals_file(), &serde_json::json!({ "goals": [] }))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::Storage;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());

        initialize_storage(&paths).unwrap();

        assert!(paths.is_initialized());
        assert!(paths.data_dir().exists());
        assert!(paths.expenses_file().exists());
        assert!(paths.goals_file().exists());
        assert!(!paths.profile_file().exists());
    }

    #[test]
    fn test_initialized_files_load_empty() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();

        let storage = Storage::open(paths).unwrap();
        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert_eq!(storage.goals.count().unwrap(), 0);
        assert!(storage.profile.get().unwrap().is_none());
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();

        let mut settings = Settings::load_or_create(&paths).unwrap();
        settings.restaurant_alert_threshold = Money::from_units(500_000);
        settings.save(&paths).unwrap();

        initialize_storage(&paths).unwrap();

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.restaurant_alert_threshold, Money::from_units(500_000));
    }
}
