//! `planwise recommend`: ranked candidates for open choices.

use serde::Serialize;
use tracing::instrument;

use planwise_adapters::ConfigurationFileReader;
use planwise_core::{
    application::{CatalogService, PlanningService},
    domain::{RecommendField, RecommendationSet},
    error::PlanwiseError,
};

use crate::{
    cli::{RecommendArgs, ReportFormat},
    commands::load_catalog,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One candidate with its display label.
#[derive(Debug, Serialize)]
struct Candidate {
    value: String,
    label: String,
}

#[derive(Debug, Serialize)]
struct FieldCandidates {
    field: RecommendField,
    candidates: Vec<Candidate>,
}

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: RecommendArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // Parse field keys before touching the file so typos fail fast.
    let fields = if args.all {
        RecommendField::ALL.to_vec()
    } else {
        parse_fields(&args.fields)?
    };

    let catalog = load_catalog(&config, None)?;
    let labels = CatalogService::new(catalog.clone());
    let service = PlanningService::new(catalog, Box::new(ConfigurationFileReader::new()));

    let wizard = service.load(&args.file)?;
    let results: Vec<FieldCandidates> = fields
        .into_iter()
        .map(|field| labelled(service.recommend(field, &wizard), &labels))
        .collect();

    match output.resolve_format(args.format) {
        ReportFormat::Json => output.json(&results)?,
        ReportFormat::Human => {
            output.header("Recommendations")?;
            for entry in &results {
                let line = if entry.candidates.is_empty() {
                    "(nothing to add)".to_string()
                } else {
                    entry
                        .candidates
                        .iter()
                        .map(|c| format!("{} [{}]", c.label, c.value))
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                output.field(entry.field.as_str(), &line)?;
            }
        }
    }

    Ok(())
}

fn parse_fields(keys: &[String]) -> Result<Vec<RecommendField>, PlanwiseError> {
    let mut fields = Vec::with_capacity(keys.len());
    for key in keys {
        let field: RecommendField = key.parse()?;
        if !fields.contains(&field) {
            fields.push(field);
        }
    }
    Ok(fields)
}

fn labelled(set: RecommendationSet, labels: &CatalogService) -> FieldCandidates {
    let group = set.field.catalog_group();
    FieldCandidates {
        field: set.field,
        candidates: set
            .values
            .into_iter()
            .map(|value| Candidate {
                label: labels.label(group, &value),
                value,
            })
            .collect(),
    }
}
