//! Livraria - Terminal-based book catalog manager
//!
//! This library provides the core functionality for a personal/small-business
//! book catalog: CRUD over a local JSON store, author search, CSV
//! export/import, and rolling backups of the store file. Every mutating
//! operation is guarded by a snapshot of the store taken before the change,
//! with a bounded number of archives retained.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data model (books)
//! - `storage`: JSON file storage layer with atomic writes
//! - `backup`: Rolling backup management with bounded retention
//! - `services`: Business logic layer (catalog orchestration, CSV import)
//! - `export`: CSV export
//! - `audit`: Audit logging of mutations
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LivrariaError, LivrariaResult};
