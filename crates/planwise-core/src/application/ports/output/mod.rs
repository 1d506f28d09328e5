//! Driven (output) ports - implemented by infrastructure.
//!
//! The `planwise-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::Configuration;
use crate::error::PlanwiseResult;

pub use crate::domain::catalog::OptionCatalog;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `planwise_adapters::filesystem::LocalFilesystem` (production)
/// - `planwise_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PlanwiseResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> PlanwiseResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> PlanwiseResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> PlanwiseResult<()>;
}

/// Port for loading configuration snapshots.
///
/// Implementations must apply merge-with-defaults semantics: a document that
/// omits sections or fields is not an error.
///
/// Implemented by:
/// - `planwise_adapters::config_reader::ConfigurationFileReader`
#[cfg_attr(test, mockall::automock)]
pub trait ConfigurationReader: Send + Sync {
    fn read(&self, path: &Path) -> PlanwiseResult<Configuration>;
}
