//! Export functionality

pub mod csv;

pub use csv::{export_books_csv, export_books_to_path, export_to_file, EXPORT_HEADER};
