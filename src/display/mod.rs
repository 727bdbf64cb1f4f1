//! Display formatting for terminal output

pub mod book;

pub use book::{format_book_details, format_book_list};
