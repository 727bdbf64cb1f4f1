//! Book repository for JSON storage
//!
//! Manages loading and saving the book table to data/livraria.json. The
//! repository owns book lifetime: it assigns ids on insert (monotonically
//! increasing, never reused) and is the only place rows are mutated.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LivrariaError;
use crate::models::{Book, BookId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable store file structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct BookData {
    /// Next id to hand out on insert
    next_id: u64,
    books: Vec<Book>,
}

impl Default for BookData {
    fn default() -> Self {
        Self {
            next_id: 1,
            books: Vec::new(),
        }
    }
}

/// Inner mutable state, kept behind one lock so id assignment and the
/// table stay consistent
#[derive(Debug, Default)]
struct Table {
    next_id: u64,
    books: BTreeMap<BookId, Book>,
}

/// Repository for book persistence
pub struct BookRepository {
    path: PathBuf,
    table: RwLock<Table>,
}

impl BookRepository {
    /// Create a new book repository backed by the given store file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            table: RwLock::new(Table {
                next_id: 1,
                books: BTreeMap::new(),
            }),
        }
    }

    /// Path to the backing store file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load books from disk
    pub fn load(&self) -> Result<(), LivrariaError> {
        let file_data: BookData = read_json(&self.path)?;

        let mut table = self
            .table
            .write()
            .map_err(|e| LivrariaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        table.books.clear();
        table.next_id = file_data.next_id;
        for book in file_data.books {
            // Guard against a hand-edited store file with ids at or above the counter
            if book.id.as_u64() >= table.next_id {
                table.next_id = book.id.as_u64() + 1;
            }
            table.books.insert(book.id, book);
        }

        Ok(())
    }

    /// Save books to disk atomically
    pub fn save(&self) -> Result<(), LivrariaError> {
        let table = self
            .table
            .read()
            .map_err(|e| LivrariaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BookData {
            next_id: table.next_id,
            books: table.books.values().cloned().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Insert a new book, assigning the next id
    pub fn insert(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        price: f64,
    ) -> Result<Book, LivrariaError> {
        let mut table = self
            .table
            .write()
            .map_err(|e| LivrariaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = BookId::from_u64(table.next_id);
        let book = Book::new(id, title, author, year, price);
        book.validate()?;

        table.next_id += 1;
        table.books.insert(id, book.clone());
        Ok(book)
    }

    /// Update the price of a book
    ///
    /// Returns the number of rows affected: 0 when the id does not exist
    /// (a silent no-op, not an error), 1 otherwise.
    pub fn update_price(&self, id: BookId, new_price: f64) -> Result<usize, LivrariaError> {
        if new_price < 0.0 {
            return Err(LivrariaError::Validation(format!(
                "Price cannot be negative: {}",
                new_price
            )));
        }

        let mut table = self
            .table
            .write()
            .map_err(|e| LivrariaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match table.books.get_mut(&id) {
            Some(book) => {
                book.price = new_price;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    /// Delete a book
    ///
    /// Returns the number of rows affected; 0 when the id does not exist.
    pub fn delete(&self, id: BookId) -> Result<usize, LivrariaError> {
        let mut table = self
            .table
            .write()
            .map_err(|e| LivrariaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(if table.books.remove(&id).is_some() { 1 } else { 0 })
    }

    /// Get a book by id
    pub fn get(&self, id: BookId) -> Result<Option<Book>, LivrariaError> {
        let table = self
            .table
            .read()
            .map_err(|e| LivrariaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(table.books.get(&id).cloned())
    }

    /// Get all books in id order
    pub fn get_all(&self) -> Result<Vec<Book>, LivrariaError> {
        let table = self
            .table
            .read()
            .map_err(|e| LivrariaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(table.books.values().cloned().collect())
    }

    /// Get all books whose author exactly equals the given string
    ///
    /// Case-sensitive, no partial matching.
    pub fn find_by_author(&self, author: &str) -> Result<Vec<Book>, LivrariaError> {
        let table = self
            .table
            .read()
            .map_err(|e| LivrariaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(table
            .books
            .values()
            .filter(|b| b.author == author)
            .cloned()
            .collect())
    }

    /// Count books
    pub fn count(&self) -> Result<usize, LivrariaError> {
        let table = self
            .table
            .read()
            .map_err(|e| LivrariaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(table.books.len())
    }
}
