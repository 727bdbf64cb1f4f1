//! Book model
//!
//! The single entity managed by the catalog. Ids are assigned by the store
//! on insert and increase monotonically; a book is never mutated after
//! creation except for its price.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LivrariaError, LivrariaResult};

/// Store-assigned book identifier
///
/// A newtype over `u64` so book ids cannot be confused with other integers
/// at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    /// Wrap a raw id value
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying id value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Store-assigned id, monotonically increasing
    pub id: BookId,
    /// Title, non-empty
    pub title: String,
    /// Author, non-empty; searched by exact match
    pub author: String,
    /// Publication year
    pub year: i32,
    /// Price, non-negative
    pub price: f64,
}

impl Book {
    /// Create a book with an already-assigned id
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        price: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            price,
        }
    }

    /// Validate the book's fields
    pub fn validate(&self) -> LivrariaResult<()> {
        if self.title.trim().is_empty() {
            return Err(LivrariaError::Validation("Title cannot be empty".into()));
        }
        if self.author.trim().is_empty() {
            return Err(LivrariaError::Validation("Author cannot be empty".into()));
        }
        if self.price < 0.0 {
            return Err(LivrariaError::Validation(format!(
                "Price cannot be negative: {}",
                self.price
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_book() {
        let book = Book::new(BookId::from_u64(1), "Dune", "Herbert", 1965, 39.90);
        assert!(book.validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let book = Book::new(BookId::from_u64(1), "  ", "Herbert", 1965, 39.90);
        let err = book.validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_empty_author_rejected() {
        let book = Book::new(BookId::from_u64(1), "Dune", "", 1965, 39.90);
        assert!(book.validate().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let book = Book::new(BookId::from_u64(1), "Dune", "Herbert", 1965, -0.01);
        assert!(book.validate().is_err());
    }

    #[test]
    fn test_zero_price_allowed() {
        let book = Book::new(BookId::from_u64(1), "Dune", "Herbert", 1965, 0.0);
        assert!(book.validate().is_ok());
    }

    #[test]
    fn test_id_display_and_parse() {
        let id = BookId::from_u64(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<BookId>().unwrap(), id);
    }

    #[test]
    fn test_id_serialization_transparent() {
        let id = BookId::from_u64(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: BookId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
