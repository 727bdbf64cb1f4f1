//! CLI command handlers

pub mod backup;
pub mod catalog;

pub use backup::{handle_backup_command, BackupCommands};
pub use catalog::{
    handle_add, handle_export, handle_find, handle_import, handle_list, handle_remove,
    handle_update_price,
};
