//! Infrastructure adapters for Planwise.
//!
//! This crate implements the ports defined in `planwise-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_catalog;
pub mod catalog_loader;
pub mod catalog_store;
pub mod config_reader;
pub mod filesystem;

// Re-export commonly used adapters
pub use catalog_loader::CatalogLoader;
pub use catalog_store::InMemoryCatalog;
pub use config_reader::ConfigurationFileReader;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
