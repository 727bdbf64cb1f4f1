//! Audit logging
//!
//! Append-only JSONL log of every mutating catalog operation.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
