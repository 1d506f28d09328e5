//! Planwise Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for the Planwise project planner: a rule
//! engine, recommendation ranker and document synthesizer over a wizard's
//! configuration snapshot.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          planwise-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (PlanningService, ExportService, ...)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Catalog, ConfigurationReader, Fs)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    planwise-adapters (Infrastructure)   │
//! │ (InMemoryCatalog, LocalFilesystem, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Configuration, Analyzer, Synthesizer)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use planwise_core::domain::{Configuration, Framework, analyze};
//!
//! let mut config = Configuration::default();
//! config.stack.framework = Some(Framework::Astro);
//!
//! let report = analyze(&config);
//! assert!((1..=10).contains(&report.complexity_score));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, ExportOptions, ExportService, PlanBundle, PlanningService,
        ports::{ConfigurationReader, Filesystem, OptionCatalog},
    };
    pub use crate::domain::{
        AnalysisReport, CatalogGroup, Configuration, DocumentKind, GeneratedDocument,
        RecommendField, Severity, StackProfile, analyze, recommend, resolve_stack_profile,
    };
    pub use crate::error::{PlanwiseError, PlanwiseResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
