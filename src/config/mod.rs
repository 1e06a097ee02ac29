//! Configuration module for fintrack
//!
//! - Path resolution for config, data and the audit log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FintrackPaths;
pub use settings::Settings;
