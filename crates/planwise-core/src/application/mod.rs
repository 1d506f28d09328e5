//! Application layer for Planwise.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PlanningService, ExportService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! planning logic itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ANALYSIS_FILE_NAME, CatalogService, ExportOptions, ExportService, GroupSummary, PlanBundle,
    PlanningService,
};

pub use ports::{ConfigurationReader, Filesystem, OptionCatalog};

pub use error::ApplicationError;
