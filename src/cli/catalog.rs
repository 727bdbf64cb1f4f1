//! Catalog CLI commands
//!
//! Implements the CLI handlers for book management. Each handler maps 1:1
//! to a catalog service operation.

use std::path::Path;

use crate::backup::BackupManager;
use crate::display::{format_book_details, format_book_list};
use crate::error::LivrariaResult;
use crate::export::export_to_file;
use crate::models::BookId;
use crate::services::{CatalogService, ImportService};
use crate::storage::Storage;

/// Add a new book to the catalog
pub fn handle_add(
    storage: &Storage,
    backup: &BackupManager,
    title: String,
    author: String,
    year: i32,
    price: f64,
) -> LivrariaResult<()> {
    let service = CatalogService::new(storage, backup);
    let book = service.add(title, author, year, price)?;

    println!("Added book:");
    print!("{}", format_book_details(&book));
    Ok(())
}

/// List all books
pub fn handle_list(storage: &Storage, backup: &BackupManager) -> LivrariaResult<()> {
    let service = CatalogService::new(storage, backup);
    let books = service.list_all()?;
    print!("{}", format_book_list(&books));
    Ok(())
}

/// Update the price of a book
pub fn handle_update_price(
    storage: &Storage,
    backup: &BackupManager,
    id: BookId,
    price: f64,
) -> LivrariaResult<()> {
    let service = CatalogService::new(storage, backup);
    let affected = service.update_price(id, price)?;

    if affected == 0 {
        println!("No book with id {} (nothing changed).", id);
    } else {
        println!("Updated price of book {} to {:.2}.", id, price);
    }
    Ok(())
}

/// Remove a book
pub fn handle_remove(storage: &Storage, backup: &BackupManager, id: BookId) -> LivrariaResult<()> {
    let service = CatalogService::new(storage, backup);
    let affected = service.remove(id)?;

    if affected == 0 {
        println!("No book with id {} (nothing changed).", id);
    } else {
        println!("Removed book {}.", id);
    }
    Ok(())
}

/// Find books by exact author name
pub fn handle_find(storage: &Storage, backup: &BackupManager, author: String) -> LivrariaResult<()> {
    let service = CatalogService::new(storage, backup);
    let books = service.find_by_author(&author)?;
    print!("{}", format_book_list(&books));
    Ok(())
}

/// Export the catalog to exports/livros_exportados.csv
pub fn handle_export(storage: &Storage) -> LivrariaResult<()> {
    let path = export_to_file(storage)?;
    println!("Exported catalog to {}", path.display());
    Ok(())
}

/// Import books from a CSV file
pub fn handle_import(storage: &Storage, backup: &BackupManager, file: &Path) -> LivrariaResult<()> {
    let service = CatalogService::new(storage, backup);
    let import = ImportService::new(&service);

    let result = import.import_from_file(file)?;
    println!("Imported {} book(s) from {}", result.imported, file.display());
    Ok(())
}
