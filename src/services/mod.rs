//! Business logic layer

pub mod catalog;
pub mod import;

pub use catalog::CatalogService;
pub use import::{ImportResult, ImportService};
