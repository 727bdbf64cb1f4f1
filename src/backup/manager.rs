//! Backup manager for the livraria catalog
//!
//! Produces point-in-time copies of the store file and bounds the total
//! archive count. Every mutating catalog operation calls [`BackupManager::snapshot`]
//! before touching the store, so the newest archive always predates the
//! mutation it guards.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::Local;

use crate::config::paths::LivrariaPaths;
use crate::error::{LivrariaError, LivrariaResult};

/// Default maximum number of archives kept in the backup directory
pub const DEFAULT_RETENTION_LIMIT: usize = 5;

/// Filename prefix shared by all archives
pub const ARCHIVE_PREFIX: &str = "backup_livraria_";

/// Metadata about one archive in the backup directory
#[derive(Debug, Clone)]
pub struct ArchiveInfo {
    /// Archive filename
    pub filename: String,
    /// Full path to the archive
    pub path: PathBuf,
    /// Filesystem modification time, used for eviction ordering
    pub modified: SystemTime,
}

/// Manages archive creation and retention
pub struct BackupManager {
    /// Path to the backup directory
    backup_dir: PathBuf,
    /// Path to the store file being archived
    store_file: PathBuf,
    /// Maximum archive count targeted by pruning
    retention_limit: usize,
}

impl BackupManager {
    /// Create a new BackupManager with the given retention limit
    pub fn new(paths: &LivrariaPaths, retention_limit: usize) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
            store_file: paths.store_file(),
            retention_limit,
        }
    }

    /// Create a new BackupManager with the default retention limit (5)
    pub fn with_default_retention(paths: &LivrariaPaths) -> Self {
        Self::new(paths, DEFAULT_RETENTION_LIMIT)
    }

    /// Get the backup directory path
    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }

    /// Get the configured retention limit
    pub fn retention_limit(&self) -> usize {
        self.retention_limit
    }

    /// List all archives, oldest first (by modification time)
    pub fn list_archives(&self) -> LivrariaResult<Vec<ArchiveInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut archives = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| LivrariaError::Backup(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| LivrariaError::Backup(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if let Some(info) = parse_archive_info(&path) {
                archives.push(info);
            }
        }

        // Filename is the tie-breaker when two archives share an mtime
        archives.sort_by(|a, b| a.modified.cmp(&b.modified).then(a.filename.cmp(&b.filename)));

        Ok(archives)
    }

    /// Delete the single oldest archive if the count has reached the limit
    ///
    /// Removes at most one archive per call even when the directory is far
    /// above the limit; repeated calls converge the count downward. The
    /// pre-check is `>= limit` because a new archive is about to be added.
    ///
    /// Returns the path of the deleted archive, if any. A failed deletion is
    /// surfaced as an error so the enclosing snapshot (and therefore the
    /// mutation it guards) aborts instead of proceeding.
    pub fn prune(&self) -> LivrariaResult<Option<PathBuf>> {
        let archives = self.list_archives()?;

        if archives.len() >= self.retention_limit {
            let oldest = &archives[0];
            fs::remove_file(&oldest.path).map_err(|e| {
                LivrariaError::Backup(format!(
                    "Failed to delete old archive {}: {}",
                    oldest.filename, e
                ))
            })?;
            return Ok(Some(oldest.path.clone()));
        }

        Ok(None)
    }

    /// Snapshot the store file into a new timestamped archive
    ///
    /// Prunes first, then copies the store's full bytes to
    /// `backup_livraria_YYYY-MM-DD_HH-MM-SS.json`. Timestamps have second
    /// granularity; two snapshots within the same second share a name and
    /// the second overwrites the first (accepted limitation).
    ///
    /// The copy goes through a temp file and an atomic rename, so a partial
    /// archive is never observable.
    pub fn snapshot(&self) -> LivrariaResult<PathBuf> {
        if !self.store_file.exists() {
            return Err(LivrariaError::Backup(format!(
                "Store file does not exist: {}",
                self.store_file.display()
            )));
        }

        self.prune()?;

        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| LivrariaError::Backup(format!("Failed to create backup directory: {}", e)))?;

        let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let filename = format!("{}{}.json", ARCHIVE_PREFIX, timestamp);
        let archive_path = self.backup_dir.join(&filename);

        copy_atomic(&self.store_file, &archive_path)
            .map_err(|e| LivrariaError::Backup(format!("Failed to write archive: {}", e)))?;

        Ok(archive_path)
    }

    /// Restore the store file from an archive
    ///
    /// Snapshots the current store first as a safety net, then atomically
    /// replaces the store file with the archive's bytes.
    pub fn restore(&self, archive_path: &Path) -> LivrariaResult<()> {
        if !archive_path.exists() {
            return Err(LivrariaError::Backup(format!(
                "Archive does not exist: {}",
                archive_path.display()
            )));
        }

        // Read the archive before the safety snapshot: the snapshot prunes,
        // and when the directory is at the limit the eviction target may be
        // this very archive.
        let archive_bytes = fs::read(archive_path)
            .map_err(|e| LivrariaError::Backup(format!("Failed to read archive: {}", e)))?;

        if self.store_file.exists() {
            self.snapshot()?;
        }

        if let Some(parent) = self.store_file.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| LivrariaError::Backup(format!("Failed to create data directory: {}", e)))?;
        }

        write_atomic(&self.store_file, &archive_bytes)
            .map_err(|e| LivrariaError::Backup(format!("Failed to restore archive: {}", e)))
    }
}

/// Copy `src` to `dst` through a temp file plus rename, so `dst` is either
/// untouched or complete
fn copy_atomic(src: &Path, dst: &Path) -> std::io::Result<()> {
    let temp_path = dst.with_extension("json.tmp");
    fs::copy(src, &temp_path)?;
    fs::rename(&temp_path, dst).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        e
    })
}

/// Write `bytes` to `dst` through a temp file plus rename
fn write_atomic(dst: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let temp_path = dst.with_extension("json.tmp");
    fs::write(&temp_path, bytes)?;
    fs::rename(&temp_path, dst).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        e
    })
}

/// Parse archive metadata from a path, ignoring files that are not archives
fn parse_archive_info(path: &Path) -> Option<ArchiveInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();

    if !filename.starts_with(ARCHIVE_PREFIX) || !filename.ends_with(".json") {
        return None;
    }

    let modified = fs::metadata(path).ok()?.modified().ok()?;

    Some(ArchiveInfo {
        filename,
        path: path.to_path_buf(),
        modified,
    })
}
