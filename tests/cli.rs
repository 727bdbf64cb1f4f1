//! End-to-end CLI tests
//!
//! Drives the built binary against a temporary data directory via the
//! LIVRARIA_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn livraria(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("livraria").unwrap();
    cmd.env("LIVRARIA_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_add_and_list() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["add", "Dune", "Herbert", "1965", "39.90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added book"));

    livraria(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Herbert"));
}

#[test]
fn test_update_price_missing_id_reports_noop() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["update-price", "9999", "10.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing changed"));
}

#[test]
fn test_remove() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["add", "Dune", "Herbert", "1965", "39.90"])
        .assert()
        .success();

    livraria(&dir)
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed book 1"));

    livraria(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found"));
}

#[test]
fn test_find_is_case_sensitive() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["add", "Dune", "Herbert", "1965", "39.90"])
        .assert()
        .success();

    livraria(&dir)
        .args(["find", "Herbert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));

    livraria(&dir)
        .args(["find", "herbert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found"));
}

#[test]
fn test_export_import_round_trip() {
    let source = TempDir::new().unwrap();

    livraria(&source)
        .args(["add", "Dune", "Herbert", "1965", "39.90"])
        .assert()
        .success();

    livraria(&source).arg("export").assert().success();

    let artifact = source.path().join("exports").join("livros_exportados.csv");
    assert!(artifact.exists());

    // Import into a fresh store
    let fresh = TempDir::new().unwrap();
    livraria(&fresh)
        .args(["import", artifact.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 book(s)"));

    livraria(&fresh)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("1965"))
        .stdout(predicate::str::contains("39.90"));
}

#[test]
fn test_import_bad_year_fails() {
    let dir = TempDir::new().unwrap();

    let csv_path = dir.path().join("bad.csv");
    std::fs::write(
        &csv_path,
        "ID,Título,Autor,Ano de Publicação,Preço\n1,Dune,Herbert,abc,39.90\n",
    )
    .unwrap();

    livraria(&dir)
        .args(["import", csv_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid year"));
}

#[test]
fn test_backup_create_and_list() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["backup", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created"));

    livraria(&dir)
        .args(["backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backup_livraria_"));
}

#[test]
fn test_mutations_leave_archives() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .args(["add", "Dune", "Herbert", "1965", "39.90"])
        .assert()
        .success();

    let backups: Vec<_> = std::fs::read_dir(dir.path().join("backups"))
        .unwrap()
        .filter_map(|e| e.ok())
        .collect();
    assert!(!backups.is_empty());
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    livraria(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Retention limit:  5 archives"));
}
