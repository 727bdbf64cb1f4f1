use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use livraria::backup::BackupManager;
use livraria::cli::{
    handle_add, handle_backup_command, handle_export, handle_find, handle_import, handle_list,
    handle_remove, handle_update_price, BackupCommands,
};
use livraria::config::paths::LivrariaPaths;
use livraria::models::BookId;
use livraria::storage::Storage;

#[derive(Parser)]
#[command(
    name = "livraria",
    version,
    about = "Terminal-based book catalog manager",
    long_about = "Livraria is a book catalog manager for a personal or small-business \
                  collection. It keeps a local store of books and takes a rolling \
                  backup of the store before every change."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new book
    Add {
        /// Book title
        title: String,
        /// Author name
        author: String,
        /// Publication year
        year: i32,
        /// Price (e.g. "39.90")
        price: f64,
    },

    /// List all books
    List,

    /// Update the price of a book
    UpdatePrice {
        /// Book id
        id: BookId,
        /// New price
        price: f64,
    },

    /// Remove a book
    Remove {
        /// Book id
        id: BookId,
    },

    /// Find books by author (exact match)
    Find {
        /// Author name
        author: String,
    },

    /// Export the catalog to CSV
    Export,

    /// Import books from a CSV file
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LivrariaPaths::new()?;
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let backup = BackupManager::with_default_retention(&paths);

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
            price,
        }) => {
            handle_add(&storage, &backup, title, author, year, price)?;
        }
        Some(Commands::List) => {
            handle_list(&storage, &backup)?;
        }
        Some(Commands::UpdatePrice { id, price }) => {
            handle_update_price(&storage, &backup, id, price)?;
        }
        Some(Commands::Remove { id }) => {
            handle_remove(&storage, &backup, id)?;
        }
        Some(Commands::Find { author }) => {
            handle_find(&storage, &backup, author)?;
        }
        Some(Commands::Export) => {
            handle_export(&storage)?;
        }
        Some(Commands::Import { file }) => {
            handle_import(&storage, &backup, &file)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&storage, &backup, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Livraria Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Store file:       {}", paths.store_file().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Retention limit:  {} archives", backup.retention_limit());
        }
        None => {
            println!("Livraria - Terminal-based book catalog manager");
            println!();
            println!("Run 'livraria --help' for usage information.");
        }
    }

    Ok(())
}
