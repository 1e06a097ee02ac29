//! User profile model
//!
//! A single profile per installation holds the monthly income that every
//! analysis is measured against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Household status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HouseholdStatus {
    #[default]
    Single,
    Married,
    #[serde(rename = "Married with Kids")]
    MarriedWithKids,
}

impl HouseholdStatus {
    pub fn all() -> &'static [Self] {
        &[Self::Single, Self::Married, Self::MarriedWithKids]
    }
}

impl fmt::Display for HouseholdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "Single"),
            Self::Married => write!(f, "Married"),
            Self::MarriedWithKids => write!(f, "Married with Kids"),
        }
    }
}

impl FromStr for HouseholdStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "single" => Ok(Self::Single),
            "married" => Ok(Self::Married),
            "marriedwithkids" | "kids" => Ok(Self::MarriedWithKids),
            _ => Err(format!(
                "Unknown status: '{}'. Use single, married or married-with-kids",
                s
            )),
        }
    }
}

/// The user's profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,

    pub monthly_income: Money,

    #[serde(default)]
    pub status: HouseholdStatus,

    #[serde(default)]
    pub dependents: u32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, monthly_income: Money) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            monthly_income,
            status: HouseholdStatus::default(),
            dependents: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProfileValidationError::EmptyName);
        }

        if self.monthly_income.is_negative() {
            return Err(ProfileValidationError::NegativeIncome);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    EmptyName,
    NegativeIncome,
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::NegativeIncome => write!(f, "Monthly income cannot be negative"),
        }
    }
}

impl std::error::Error for ProfileValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!("single".parse::<HouseholdStatus>(), Ok(HouseholdStatus::Single));
        assert_eq!("Married".parse::<HouseholdStatus>(), Ok(HouseholdStatus::Married));
        assert_eq!(
            "married-with-kids".parse::<HouseholdStatus>(),
            Ok(HouseholdStatus::MarriedWithKids)
        );
        assert_eq!(
            "Married with Kids".parse::<HouseholdStatus>(),
            Ok(HouseholdStatus::MarriedWithKids)
        );
        assert!("divorced".parse::<HouseholdStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&HouseholdStatus::MarriedWithKids).unwrap();
        assert_eq!(json, "\"Married with Kids\"");
    }

    #[test]
    fn test_validation() {
        let profile = UserProfile::new("Budi", Money::from_units(8_000_000));
        assert!(profile.validate().is_ok());

        let blank = UserProfile::new("  ", Money::from_units(8_000_000));
        assert_eq!(blank.validate(), Err(ProfileValidationError::EmptyName));
    }
}
