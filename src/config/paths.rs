//! Path management for the livraria catalog
//!
//! Provides XDG-compliant path resolution for the store file, backups, and
//! CSV exports. All directories hang off a single base directory that is
//! passed explicitly to constructors rather than read from globals.
//!
//! ## Path Resolution Order
//!
//! 1. `LIVRARIA_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/livraria` or `~/.config/livraria`
//! 3. Windows: `%APPDATA%\livraria`

use std::path::PathBuf;

use crate::error::LivrariaError;

/// Name of the single store file under `data/`
pub const STORE_FILE_NAME: &str = "livraria.json";

/// Name of the CSV export artifact under `exports/`
pub const EXPORT_FILE_NAME: &str = "livros_exportados.csv";

/// Manages all paths used by the catalog
#[derive(Debug, Clone)]
pub struct LivrariaPaths {
    /// Base directory for all catalog data
    base_dir: PathBuf,
}

impl LivrariaPaths {
    /// Create a new LivrariaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, LivrariaError> {
        let base_dir = if let Ok(custom) = std::env::var("LIVRARIA_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LivrariaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (base/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the backup directory (base/backups/)
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the export directory (base/exports/)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the store file (data/livraria.json)
    pub fn store_file(&self) -> PathBuf {
        self.data_dir().join(STORE_FILE_NAME)
    }

    /// Get the path to the CSV export artifact (exports/livros_exportados.csv)
    pub fn export_file(&self) -> PathBuf {
        self.export_dir().join(EXPORT_FILE_NAME)
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure all required directories exist
    ///
    /// Creates the base directory plus `data/`, `backups/`, and `exports/`.
    pub fn ensure_directories(&self) -> Result<(), LivrariaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LivrariaError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| LivrariaError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| LivrariaError::Io(format!("Failed to create backup directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| LivrariaError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LivrariaError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| LivrariaError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("livraria"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LivrariaError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LivrariaError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("livraria"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LivrariaPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.backup_dir(), temp_dir.path().join("backups"));
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LivrariaPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.backup_dir().exists());
        assert!(paths.export_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LivrariaPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.store_file(),
            temp_dir.path().join("data").join("livraria.json")
        );
        assert_eq!(
            paths.export_file(),
            temp_dir.path().join("exports").join("livros_exportados.csv")
        );
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }
}
