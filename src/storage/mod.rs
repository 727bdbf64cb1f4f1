//! Storage layer for the livraria catalog
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The store is a single table of books in data/livraria.json.

pub mod books;
pub mod file_io;

pub use books::BookRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::LivrariaPaths;
use crate::error::LivrariaError;

/// Main storage coordinator
pub struct Storage {
    paths: LivrariaPaths,
    pub books: BookRepository,
}

impl Storage {
    /// Create a new Storage instance
    ///
    /// Ensures directories exist and materializes an empty store file on
    /// first run, so the backup manager always has something to copy.
    pub fn new(paths: LivrariaPaths) -> Result<Self, LivrariaError> {
        paths.ensure_directories()?;

        let books = BookRepository::new(paths.store_file());
        if !paths.store_file().exists() {
            books.save()?;
        }

        Ok(Self { books, paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LivrariaPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), LivrariaError> {
        self.books.load()
    }
}
