//! YAML export
//!
//! Same document as the JSON export, for reading by humans.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> FinanceResult<()> {
    let export = FullExport::from_storage(storage)?;

    let header = format!(
        "# fintrack data export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a YAML export
pub fn read_yaml_export(yaml: &str) -> FinanceResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml).map_err(|e| FinanceError::Export(e.to_string()))?;
    export.validate().map_err(FinanceError::Export)?;
    Ok(export)
}
