//! Audit log command

use crate::error::FinanceResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> FinanceResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    println!();
    println!(
        "Showing {} of {} entries ({})",
        entries.len(),
        storage.audit().entry_count()?,
        storage.audit().path().display()
    );

    Ok(())
}
