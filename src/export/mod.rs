//! Data export
//!
//! - CSV: expenses, for spreadsheets
//! - JSON: the full data set, machine-readable
//! - YAML: the full data set, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, read_yaml_export};
