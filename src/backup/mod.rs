//! Backup management
//!
//! Rolling archives of the store file with bounded retention, plus restore.

pub mod manager;

pub use manager::{ArchiveInfo, BackupManager, ARCHIVE_PREFIX, DEFAULT_RETENTION_LIMIT};
