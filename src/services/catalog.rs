//! Catalog service
//!
//! Sequences backup snapshots around mutating store operations. Every
//! mutator snapshots the store BEFORE applying the change; if the snapshot
//! fails the mutation never happens. Read-only operations pass straight
//! through to the repository.

use std::path::PathBuf;

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::backup::BackupManager;
use crate::error::LivrariaResult;
use crate::models::{Book, BookId};
use crate::storage::Storage;

/// Service for catalog management
pub struct CatalogService<'a> {
    storage: &'a Storage,
    backup: &'a BackupManager,
    audit: AuditLogger,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service
    pub fn new(storage: &'a Storage, backup: &'a BackupManager) -> Self {
        let audit = AuditLogger::new(storage.paths().audit_log());
        Self {
            storage,
            backup,
            audit,
        }
    }

    /// Add a new book
    ///
    /// Snapshots the store, then inserts and persists. The id is assigned
    /// by the store.
    pub fn add(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        price: f64,
    ) -> LivrariaResult<Book> {
        self.backup.snapshot()?;

        let book = self.storage.books.insert(title, author, year, price)?;
        self.storage.books.save()?;

        self.audit.log(&AuditEntry::new(
            Operation::Create,
            book.id,
            Some(book.title.clone()),
        ))?;

        Ok(book)
    }

    /// Update the price of a book
    ///
    /// Snapshots the store, then updates. A missing id is a silent no-op:
    /// the returned affected-row count is 0 and nothing changes.
    pub fn update_price(&self, id: BookId, new_price: f64) -> LivrariaResult<usize> {
        self.backup.snapshot()?;

        let before = self.storage.books.get(id)?;
        let affected = self.storage.books.update_price(id, new_price)?;

        if affected > 0 {
            self.storage.books.save()?;
            let summary = before.map(|b| format!("{:.2} -> {:.2}", b.price, new_price));
            self.audit
                .log(&AuditEntry::new(Operation::Update, id, summary))?;
        }

        Ok(affected)
    }

    /// Remove a book
    ///
    /// Snapshots the store, then deletes. Same silent no-op contract on a
    /// missing id as [`CatalogService::update_price`].
    pub fn remove(&self, id: BookId) -> LivrariaResult<usize> {
        self.backup.snapshot()?;

        let before = self.storage.books.get(id)?;
        let affected = self.storage.books.delete(id)?;

        if affected > 0 {
            self.storage.books.save()?;
            self.audit
                .log(&AuditEntry::new(Operation::Delete, id, before.map(|b| b.title)))?;
        }

        Ok(affected)
    }

    /// List all books in store order (no snapshot)
    pub fn list_all(&self) -> LivrariaResult<Vec<Book>> {
        self.storage.books.get_all()
    }

    /// Find books by exact, case-sensitive author match (no snapshot)
    pub fn find_by_author(&self, author: &str) -> LivrariaResult<Vec<Book>> {
        self.storage.books.find_by_author(author)
    }

    /// Create a backup on demand (the explicit backup command)
    pub fn backup_now(&self) -> LivrariaResult<PathBuf> {
        self.backup.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::backup::BackupManager;
    use crate::config::paths::LivrariaPaths;
    use tempfile::TempDir;

    fn create_test_env() -> (TempDir, LivrariaPaths, Storage, BackupManager) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LivrariaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();
        let backup = BackupManager::with_default_retention(&paths);
        (temp_dir, paths, storage, backup)
    }

    fn archive_count(backup: &BackupManager) -> usize {
        backup.list_archives().unwrap().len()
    }

    #[test]
    fn test_add_creates_snapshot_first() {
        let (_temp, _paths, storage, backup) = create_test_env();
        let service = CatalogService::new(&storage, &backup);

        assert_eq!(archive_count(&backup), 0);
        let book = service.add("Dune", "Herbert", 1965, 39.90).unwrap();

        assert_eq!(book.id.as_u64(), 1);
        assert_eq!(archive_count(&backup), 1);

        // The archive predates the insert: it holds an empty store
        let archives = backup.list_archives().unwrap();
        let contents = std::fs::read_to_string(&archives[0].path).unwrap();
        assert!(!contents.contains("Dune"));
    }

    #[test]
    fn test_update_price_snapshots_even_for_noop() {
        let (_temp, _paths, storage, backup) = create_test_env();
        let service = CatalogService::new(&storage, &backup);

        let affected = service.update_price(BookId::from_u64(9999), 10.0).unwrap();
        assert_eq!(affected, 0);

        // Snapshot happens before the store is touched, hit or miss
        assert_eq!(archive_count(&backup), 1);
        assert!(service.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_update_price_applies_and_persists() {
        let (_temp, paths, storage, backup) = create_test_env();
        let service = CatalogService::new(&storage, &backup);

        let book = service.add("Dune", "Herbert", 1965, 39.90).unwrap();
        let affected = service.update_price(book.id, 45.00).unwrap();
        assert_eq!(affected, 1);

        // Reload from disk to confirm persistence
        let mut storage2 = Storage::new(paths).unwrap();
        storage2.load_all().unwrap();
        assert_eq!(storage2.books.get(book.id).unwrap().unwrap().price, 45.00);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let (_temp, _paths, storage, backup) = create_test_env();
        let service = CatalogService::new(&storage, &backup);

        service.add("Dune", "Herbert", 1965, 39.90).unwrap();
        let affected = service.remove(BookId::from_u64(9999)).unwrap();
        assert_eq!(affected, 0);
        assert_eq!(service.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_remove() {
        let (_temp, _paths, storage, backup) = create_test_env();
        let service = CatalogService::new(&storage, &backup);

        let book = service.add("Dune", "Herbert", 1965, 39.90).unwrap();
        let affected = service.remove(book.id).unwrap();
        assert_eq!(affected, 1);
        assert!(service.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_failed_snapshot_aborts_mutation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LivrariaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();
        let backup = BackupManager::with_default_retention(&paths);
        let service = CatalogService::new(&storage, &backup);

        // Sabotage the precondition: no store file, so snapshot() must fail
        std::fs::remove_file(paths.store_file()).unwrap();

        let err = service.add("Dune", "Herbert", 1965, 39.90).unwrap_err();
        assert!(err.is_backup());

        // Mutation never happened
        assert_eq!(storage.books.count().unwrap(), 0);
    }

    #[test]
    fn test_reads_create_no_snapshot() {
        let (_temp, _paths, storage, backup) = create_test_env();
        let service = CatalogService::new(&storage, &backup);

        service.add("Dune", "Herbert", 1965, 39.90).unwrap();
        let after_add = archive_count(&backup);

        service.list_all().unwrap();
        service.find_by_author("Herbert").unwrap();

        assert_eq!(archive_count(&backup), after_add);
    }

    #[test]
    fn test_find_by_author_case_sensitive() {
        let (_temp, _paths, storage, backup) = create_test_env();
        let service = CatalogService::new(&storage, &backup);

        service.add("Dune", "Herbert", 1965, 39.90).unwrap();

        assert_eq!(service.find_by_author("Herbert").unwrap().len(), 1);
        assert!(service.find_by_author("herbert").unwrap().is_empty());
    }

    #[test]
    fn test_mutations_are_audited() {
        let (_temp, paths, storage, backup) = create_test_env();
        let service = CatalogService::new(&storage, &backup);

        let book = service.add("Dune", "Herbert", 1965, 39.90).unwrap();
        service.update_price(book.id, 45.00).unwrap();
        service.remove(book.id).unwrap();

        // No-op mutations leave no entry
        service.remove(BookId::from_u64(9999)).unwrap();

        let logger = AuditLogger::new(paths.audit_log());
        assert_eq!(logger.entry_count().unwrap(), 3);
    }

    #[test]
    fn test_backup_now() {
        let (_temp, _paths, storage, backup) = create_test_env();
        let service = CatalogService::new(&storage, &backup);

        let archive = service.backup_now().unwrap();
        assert!(archive.exists());
    }
}
