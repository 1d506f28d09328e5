//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into service calls and render the results.
//! No business logic lives here.

use std::{path::Path, sync::Arc};

use tracing::debug;

use planwise_adapters::{CatalogLoader, ConfigurationFileReader, InMemoryCatalog};
use planwise_core::application::PlanningService;

use crate::{config::AppConfig, error::CliResult};

pub mod analyze;
pub mod catalog;
pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod profile;
pub mod recommend;

/// Built-in catalog plus the overlay directory, if one is configured.
///
/// `override_dir` wins over `catalog.directory` from the app config.
pub fn load_catalog(
    config: &AppConfig,
    override_dir: Option<&Path>,
) -> CliResult<Arc<InMemoryCatalog>> {
    let catalog = InMemoryCatalog::with_builtin()?;

    if let Some(dir) = override_dir.or(config.catalog.directory.as_deref()) {
        let applied = CatalogLoader::new(dir).apply_to(&catalog)?;
        debug!(dir = %dir.display(), applied, "Catalog overlay applied");
    }

    Ok(Arc::new(catalog))
}

/// Planning service over the configured catalog and the file reader.
pub fn planning_service(config: &AppConfig) -> CliResult<PlanningService> {
    let catalog = load_catalog(config, None)?;
    Ok(PlanningService::new(
        catalog,
        Box::new(ConfigurationFileReader::new()),
    ))
}
