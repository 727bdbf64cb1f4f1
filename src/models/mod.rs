//! Core data models

pub mod book;

pub use book::{Book, BookId};
