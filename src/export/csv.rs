//! CSV export functionality
//!
//! Materializes the book table into a comma-separated UTF-8 artifact with a
//! fixed header row, one data row per book in store order. Fields are quoted
//! only when they embed a comma, quote, or newline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{LivrariaError, LivrariaResult};
use crate::storage::Storage;

/// Fixed header row of the export artifact
pub const EXPORT_HEADER: &str = "ID,Título,Autor,Ano de Publicação,Preço";

/// Export all books to CSV
pub fn export_books_csv<W: Write>(storage: &Storage, writer: &mut W) -> LivrariaResult<()> {
    writeln!(writer, "{}", EXPORT_HEADER)
        .map_err(|e| LivrariaError::Export(e.to_string()))?;

    let books = storage.books.get_all()?;

    for book in books {
        writeln!(
            writer,
            "{},{},{},{},{:.2}",
            book.id,
            escape_csv(&book.title),
            escape_csv(&book.author),
            book.year,
            book.price
        )
        .map_err(|e| LivrariaError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export all books to the standard export artifact (exports/livros_exportados.csv)
///
/// Returns the path of the written file.
pub fn export_to_file(storage: &Storage) -> LivrariaResult<std::path::PathBuf> {
    let path = storage.paths().export_file();
    export_books_to_path(storage, &path)?;
    Ok(path)
}

/// Export all books to an arbitrary file path
pub fn export_books_to_path(storage: &Storage, path: &Path) -> LivrariaResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            LivrariaError::Export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| LivrariaError::Export(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    export_books_csv(storage, &mut writer)?;
    writer
        .flush()
        .map_err(|e| LivrariaError::Export(e.to_string()))
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
