//! Audit logging for fintrack
//!
//! Every create, update and delete performed by a service is recorded with
//! before/after snapshots in an append-only JSONL file.
//!
//! - `AuditEntry`: one operation on one entity
//! - `AuditLogger`: appends entries to `audit.log` and reads them back
//! - `summarize_changes`: a one-line description of what an update changed

mod diff;
mod entry;
mod logger;

pub use diff::{generate_diff, summarize_changes};
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
