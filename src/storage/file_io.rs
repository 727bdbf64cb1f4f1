//! Store file I/O
//!
//! The store is one JSON document on disk. Reads tolerate a missing file
//! (fresh install, nothing persisted yet); writes land in a temp file next
//! to the store and are renamed into place, so a crash mid-write can never
//! leave a torn store behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LivrariaError;

/// Load a JSON document, falling back to `T::default()` when the file
/// does not exist yet
pub fn read_json<T, P>(path: P) -> Result<T, LivrariaError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| LivrariaError::Storage(format!("Cannot read {}: {}", path.display(), e)))?;

    serde_json::from_str(&contents).map_err(|e| {
        LivrariaError::Storage(format!("{} is not valid JSON: {}", path.display(), e))
    })
}

/// Persist a JSON document atomically
///
/// Serializes in memory first, then writes to `<path>.json.tmp`, syncs, and
/// renames over the destination. Readers see either the old document or the
/// new one, never a partial write.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), LivrariaError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LivrariaError::Storage(format!("Cannot create {}: {}", parent.display(), e))
        })?;
    }

    let json = serde_json::to_string_pretty(data)
        .map_err(|e| LivrariaError::Storage(format!("Cannot serialize store: {}", e)))?;

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let mut file = File::create(&temp_path).map_err(|e| {
        LivrariaError::Storage(format!("Cannot create {}: {}", temp_path.display(), e))
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| LivrariaError::Storage(format!("Cannot write {}: {}", temp_path.display(), e)))?;

    file.sync_all()
        .map_err(|e| LivrariaError::Storage(format!("Cannot sync {}: {}", temp_path.display(), e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LivrariaError::Storage(format!("Cannot replace {}: {}", path.display(), e))
    })
}
