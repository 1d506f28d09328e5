//! `planwise generate`: synthesize the planning documents.
//!
//! Without an output directory the Markdown goes to stdout; with one, the
//! documents are exported as files through the core export service.

use std::path::PathBuf;

use tracing::{info, instrument};

use planwise_adapters::LocalFilesystem;
use planwise_core::{
    application::{ExportOptions, ExportService, PlanBundle},
    domain::Severity,
};

use crate::{
    cli::GenerateArgs,
    commands::planning_service,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display(), document = ?args.document))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = planning_service(&config)?;
    let bundle = service.plan_file(&args.file, &args.document.kinds())?;

    let errors = bundle.report.warnings_with(Severity::Error).count();
    if errors > 0 {
        output.warning(&format!(
            "{errors} error finding(s); run `planwise analyze` for details"
        ))?;
    }

    let include_analysis = args.with_analysis || config.export.include_analysis;
    match args.out.or(config.export.directory) {
        Some(dir) => export(&bundle, dir, args.force, include_analysis, &output),
        None => {
            if args.with_analysis {
                output.warning("--with-analysis only applies together with --out")?;
            }
            for doc in &bundle.documents {
                output.data(&doc.to_markdown())?;
            }
            Ok(())
        }
    }
}

fn export(
    bundle: &PlanBundle,
    dir: PathBuf,
    force: bool,
    include_analysis: bool,
    output: &OutputManager,
) -> CliResult<()> {
    let service = ExportService::new(Box::new(LocalFilesystem::new()));
    let written = service.export(
        &dir,
        &bundle.documents,
        include_analysis.then_some(&bundle.report),
        ExportOptions { force },
    )?;

    info!(dir = %dir.display(), files = written.len(), "Documents exported");
    for path in &written {
        output.success(&format!("Wrote {}", path.display()))?;
    }
    output.field("Stack profile", bundle.profile.display_name)?;
    Ok(())
}
