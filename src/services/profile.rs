//! Profile service
//!
//! Reads and writes the single user profile.

use chrono::Utc;

use crate::audit::{summarize_changes, EntityType};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{HouseholdStatus, Money, UserProfile};
use crate::storage::Storage;

/// Entity ID used in the audit log for the singleton profile
const PROFILE_AUDIT_ID: &str = "profile";

/// Input for saving the profile
#[derive(Debug, Clone)]
pub struct SaveProfileInput {
    pub name: String,
    pub monthly_income: Money,
    pub status: HouseholdStatus,
    pub dependents: u32,
}

pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> FinanceResult<Option<UserProfile>> {
        self.storage.profile.get()
    }

    /// The profile, or a not-found error telling the user how to create one
    pub fn require(&self) -> FinanceResult<UserProfile> {
        self.get()?.ok_or_else(FinanceError::profile_missing)
    }

    /// Create the profile, or overwrite the existing one
    pub fn save(&self, input: SaveProfileInput) -> FinanceResult<UserProfile> {
        let existing = self.get()?;

        let profile = match &existing {
            Some(current) => UserProfile {
                name: input.name.trim().to_string(),
                monthly_income: input.monthly_income,
                status: input.status,
                dependents: input.dependents,
                created_at: current.created_at,
                updated_at: Utc::now(),
            },
            None => {
                let mut profile = UserProfile::new(input.name.trim(), input.monthly_income);
                profile.status = input.status;
                profile.dependents = input.dependents;
                profile
            }
        };

        profile
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.profile.set(profile.clone())?;
        self.storage.profile.save()?;

        match existing {
            Some(before) => {
                let diff = summarize_changes(&before, &profile);
                self.storage.log_update(
                    EntityType::Profile,
                    PROFILE_AUDIT_ID,
                    Some(profile.name.clone()),
                    &before,
                    &profile,
                    diff,
                )?;
                tracing::info!(name = %profile.name, "profile updated");
            }
            None => {
                self.storage.log_create(
                    EntityType::Profile,
                    PROFILE_AUDIT_ID,
                    Some(profile.name.clone()),
                    &profile,
                )?;
                tracing::info!(name = %profile.name, "profile created");
            }
        }

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::FintrackPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    fn input(name: &str, income: i64) -> SaveProfileInput {
        SaveProfileInput {
            name: name.to_string(),
            monthly_income: Money::from_units(income),
            status: HouseholdStatus::Single,
            dependents: 0,
        }
    }

    #[test]
    fn test_missing_profile() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        assert!(service.get().unwrap().is_none());
        assert!(service.require().unwrap_err().is_not_found());
    }

    #[test]
    fn test_create_then_update() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        let first = service.save(input(" Dewi ", 8_000_000)).unwrap();
        assert_eq!(first.name, "Dewi");

        let mut second_input = input("Dewi", 9_500_000);
        second_input.status = HouseholdStatus::MarriedWithKids;
        second_input.dependents = 2;
        let second = service.save(second_input).unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.monthly_income, Money::from_units(9_500_000));
        assert_eq!(service.require().unwrap().dependents, 2);

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Update);
        let diff = entries[1].diff_summary.as_deref().unwrap();
        assert!(diff.contains("monthly_income"));
        assert!(diff.contains("dependents: 0 -> 2"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        let err = service.save(input("   ", 1_000_000)).unwrap_err();
        assert!(err.is_validation());
        assert!(service.get().unwrap().is_none());
    }

    #[test]
    fn test_profile_persists() {
        let (temp_dir, storage) = create_test_storage();
        ProfileService::new(&storage)
            .save(input("Eko", 4_000_000))
            .unwrap();

        let reopened =
            Storage::open(FintrackPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let profile = ProfileService::new(&reopened).require().unwrap();
        assert_eq!(profile.name, "Eko");
    }
}
