//! Book display formatting
//!
//! Formats books for terminal output in table and detail views.

use crate::models::Book;

/// Format a list of books as a table
pub fn format_book_list(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found.\n".to_string();
    }

    let title_width = books
        .iter()
        .map(|b| b.title.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let author_width = books
        .iter()
        .map(|b| b.author.chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:<title_width$}  {:<author_width$}  {:>6}  {:>10}\n",
        "ID",
        "Title",
        "Author",
        "Year",
        "Price",
        title_width = title_width,
        author_width = author_width,
    ));
    output.push_str(&format!(
        "{}  {}  {}  {}  {}\n",
        "-".repeat(5),
        "-".repeat(title_width),
        "-".repeat(author_width),
        "-".repeat(6),
        "-".repeat(10),
    ));

    for book in books {
        output.push_str(&format!(
            "{:>5}  {:<title_width$}  {:<author_width$}  {:>6}  {:>10.2}\n",
            book.id.to_string(),
            book.title,
            book.author,
            book.year,
            book.price,
            title_width = title_width,
            author_width = author_width,
        ));
    }

    output
}

/// Format a single book's details
pub fn format_book_details(book: &Book) -> String {
    let mut output = String::new();
    output.push_str(&format!("Book #{}\n", book.id));
    output.push_str(&format!("  Title:  {}\n", book.title));
    output.push_str(&format!("  Author: {}\n", book.author));
    output.push_str(&format!("  Year:   {}\n", book.year));
    output.push_str(&format!("  Price:  {:.2}\n", book.price));
    output
}
