//! Backup CLI commands

use clap::Subcommand;

use crate::backup::BackupManager;
use crate::error::{LivrariaError, LivrariaResult};
use crate::services::CatalogService;
use crate::storage::Storage;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a backup of the store now
    Create,
    /// List available archives, oldest first
    List,
    /// Restore the store from an archive
    Restore {
        /// Archive filename (as shown by `backup list`)
        filename: String,
    },
}

/// Handle a backup command
pub fn handle_backup_command(
    storage: &Storage,
    backup: &BackupManager,
    cmd: BackupCommands,
) -> LivrariaResult<()> {
    match cmd {
        BackupCommands::Create => {
            let service = CatalogService::new(storage, backup);
            let path = service.backup_now()?;
            println!("Backup created: {}", path.display());
        }

        BackupCommands::List => {
            let archives = backup.list_archives()?;
            if archives.is_empty() {
                println!("No archives found.");
            } else {
                for archive in archives {
                    println!("{}", archive.filename);
                }
            }
        }

        BackupCommands::Restore { filename } => {
            let path = backup.backup_dir().join(&filename);
            if !path.exists() {
                return Err(LivrariaError::Backup(format!(
                    "Archive not found: {}",
                    filename
                )));
            }
            backup.restore(&path)?;
            println!("Store restored from {}", filename);
            println!("Re-run your command to see the restored data.");
        }
    }

    Ok(())
}
