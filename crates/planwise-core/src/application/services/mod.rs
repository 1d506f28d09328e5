//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "plan this file" or "export these documents".

pub mod catalog_service;
pub mod export_service;
pub mod planning_service;

pub use catalog_service::{CatalogService, GroupSummary};
pub use export_service::{ANALYSIS_FILE_NAME, ExportOptions, ExportService};
pub use planning_service::{PlanBundle, PlanningService};
