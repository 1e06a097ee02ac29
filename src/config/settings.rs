//! User settings for fintrack
//!
//! Manages display preferences (currency label, thousands separator, date
//! format) and the restaurant spending alert threshold used by the tips.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FinanceError;
use crate::models::{CurrencyFormat, Money};

/// User settings for fintrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Label printed before amounts
    #[serde(default = "default_currency_label")]
    pub currency_label: String,

    /// Thousands separator for amounts
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Restaurant spending above this amount triggers a tip
    #[serde(default = "default_restaurant_alert_threshold")]
    pub restaurant_alert_threshold: Money,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_label() -> String {
    "Rp".to_string()
}

fn default_thousands_separator() -> char {
    '.'
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_restaurant_alert_threshold() -> Money {
    Money::from_units(1_000_000)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_label: default_currency_label(),
            thousands_separator: default_thousands_separator(),
            date_format: default_date_format(),
            restaurant_alert_threshold: default_restaurant_alert_threshold(),
        }
    }
}

impl Settings {
    /// Currency formatting derived from these settings
    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_label.clone(), self.thousands_separator)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if StrftimeItems::new(&settings.date_format).any(|item| matches!(item, Item::Error)) {
                return Err(FinanceError::Config(format!(
                    "Invalid date_format in settings: '{}'",
                    settings.date_format
                )));
            }

            Ok(settings)
        } else {
            // Don't save yet - `fintrack init` decides when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FinanceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
