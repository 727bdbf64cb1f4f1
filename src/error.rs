//! Custom error types for the livraria catalog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for catalog operations
#[derive(Error, Debug)]
pub enum LivrariaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors (store file unreadable, lock poisoned, ...)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Backup creation, pruning, or restore errors
    #[error("Backup error: {0}")]
    Backup(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// CSV import errors (fatal to the whole run)
    #[error("Import error: {0}")]
    Import(String),

    /// CSV export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LivrariaError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a backup error
    pub fn is_backup(&self) -> bool {
        matches!(self, Self::Backup(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LivrariaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LivrariaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for catalog operations
pub type LivrariaResult<T> = Result<T, LivrariaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LivrariaError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_backup_error() {
        let err = LivrariaError::Backup("copy failed".into());
        assert_eq!(err.to_string(), "Backup error: copy failed");
        assert!(err.is_backup());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let livraria_err: LivrariaError = io_err.into();
        assert!(matches!(livraria_err, LivrariaError::Io(_)));
    }
}
