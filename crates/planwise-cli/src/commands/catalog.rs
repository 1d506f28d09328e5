//! `planwise catalog`: list option groups or the options of one group.

use planwise_core::{
    application::CatalogService,
    domain::CatalogGroup,
    error::PlanwiseError,
};

use crate::{
    cli::{CatalogArgs, ReportFormat},
    commands::load_catalog,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: CatalogArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let group = args
        .group
        .as_deref()
        .map(str::parse::<CatalogGroup>)
        .transpose()
        .map_err(PlanwiseError::from)?;

    let service = CatalogService::new(load_catalog(&config, args.catalog_dir.as_deref())?);
    let format = output.resolve_format(args.format);

    match group {
        None => {
            let groups = service.groups();
            if format == ReportFormat::Json {
                return output.json(&groups);
            }
            output.header("Catalog groups")?;
            for summary in &groups {
                output.field(summary.group.as_str(), &format!("{} options", summary.entries))?;
            }
        }
        Some(group) => {
            let entries = service.entries(group);
            if format == ReportFormat::Json {
                return output.json(&entries);
            }
            output.header(&format!("{group} ({} options)", entries.len()))?;
            for entry in &entries {
                let line = if entry.description.is_empty() {
                    format!("  {:<20} {}", entry.id, entry.label)
                } else {
                    format!("  {:<20} {} - {}", entry.id, entry.label, entry.description)
                };
                output.print(&line)?;
            }
        }
    }

    Ok(())
}
