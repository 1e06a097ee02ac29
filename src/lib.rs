//! fintrack - terminal personal finance tracker
//!
//! Records expenses against a monthly income and measures them with the
//! 50/30/20 budgeting rule: half of income for needs, 30% for wants and the
//! rest for savings.
//!
//! # Architecture
//!
//! - `analysis`: Pure functions: classification, spending analysis, health score,
//!   savings projections and tips
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, profile, savings goals, money)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `chat`: Financial context and prompts for a chat assistant
//! - `export`: CSV, JSON and YAML export
//! - `display` / `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::paths::FintrackPaths;
//! use fintrack::services::ReportService;
//! use fintrack::storage::Storage;
//!
//! let storage = Storage::open(FintrackPaths::new()?)?;
//! let settings = fintrack::config::settings::Settings::load_or_create(storage.paths())?;
//! let dashboard = ReportService::new(&storage, &settings).dashboard()?;
//! println!("Health score: {}", dashboard.health.score);
//! ```

pub mod analysis;
pub mod audit;
pub mod chat;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
