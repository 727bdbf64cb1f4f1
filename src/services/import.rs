//! CSV import service
//!
//! Reads a tabular text artifact in the export format (header row plus
//! positional [id, title, author, year, price] columns) and adds every data
//! row through the catalog service. Each row is an independent add, so each
//! row triggers its own snapshot+prune cycle.
//!
//! A malformed numeric field is fatal to the whole run: rows after the bad
//! row are not applied, rows before it are already committed.

use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::error::{LivrariaError, LivrariaResult};
use crate::services::CatalogService;

/// Result of a completed import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    /// Number of books imported
    pub imported: usize,
}

/// Service for CSV import
pub struct ImportService<'a> {
    catalog: &'a CatalogService<'a>,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(catalog: &'a CatalogService<'a>) -> Self {
        Self { catalog }
    }

    /// Import books from a CSV file
    pub fn import_from_file(&self, path: &Path) -> LivrariaResult<ImportResult> {
        let file = File::open(path).map_err(|e| {
            LivrariaError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;
        self.import_from_reader(file)
    }

    /// Import books from any reader producing CSV text
    ///
    /// The first row is treated as a header and skipped.
    pub fn import_from_reader<R: std::io::Read>(&self, reader: R) -> LivrariaResult<ImportResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let mut imported = 0;
        for (idx, result) in csv_reader.records().enumerate() {
            let record =
                result.map_err(|e| LivrariaError::Import(format!("Failed to read CSV row: {}", e)))?;

            let (title, author, year, price) = parse_record(&record, idx + 1)?;

            // Each add runs its own snapshot+prune cycle
            self.catalog.add(title, author, year, price)?;
            imported += 1;
        }

        Ok(ImportResult { imported })
    }
}

/// Parse one data row: [id(ignored), title, author, year, price]
fn parse_record(record: &StringRecord, row: usize) -> LivrariaResult<(String, String, i32, f64)> {
    let field = |idx: usize, name: &str| -> LivrariaResult<&str> {
        record
            .get(idx)
            .ok_or_else(|| LivrariaError::Import(format!("Row {}: missing {} column", row, name)))
    };

    let title = field(1, "title")?.to_string();
    let author = field(2, "author")?.to_string();

    let year_raw = field(3, "year")?;
    let year: i32 = year_raw
        .trim()
        .parse()
        .map_err(|_| LivrariaError::Import(format!("Row {}: invalid year '{}'", row, year_raw)))?;

    let price_raw = field(4, "price")?;
    let price: f64 = price_raw
        .trim()
        .parse()
        .map_err(|_| LivrariaError::Import(format!("Row {}: invalid price '{}'", row, price_raw)))?;

    Ok((title, author, year, price))
}
