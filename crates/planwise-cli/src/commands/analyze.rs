//! `planwise analyze`: score a configuration and list findings.

use tracing::{info, instrument};

use planwise_core::domain::{AnalysisReport, DomainFlags, Severity};

use crate::{
    cli::{AnalyzeArgs, ReportFormat},
    commands::planning_service,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: AnalyzeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = planning_service(&config)?;
    let wizard = service.load(&args.file)?;
    let report = service.analyze(&wizard);

    info!(
        score = report.complexity_score,
        findings = report.finding_count(),
        "Analysis complete"
    );

    match output.resolve_format(args.format) {
        ReportFormat::Json => output.json(&report)?,
        ReportFormat::Human => render_human(&wizard.project.name, &report, &output)?,
    }

    if args.fail_on_error && report.has_blocking_errors() {
        return Err(CliError::BlockingFindings {
            count: report.warnings_with(Severity::Error).count(),
        });
    }

    Ok(())
}

fn render_human(name: &str, report: &AnalysisReport, output: &OutputManager) -> CliResult<()> {
    let title = if name.is_empty() { "Untitled project" } else { name };
    output.header(&format!("Analysis: {title}"))?;
    output.field(
        "Complexity",
        &format!("{}/10 ({})", report.complexity_score, report.complexity_label),
    )?;

    let scope = &report.scope_estimate;
    output.field("Estimated effort", scope.estimated_effort)?;
    output.field("Configured sections", &scope.configured_section_count.to_string())?;
    output.field("Features", &scope.total_feature_count.to_string())?;
    output.field("Domains", &enabled_domains(&scope.domain_flags))?;

    if !report.warnings.is_empty() {
        output.print("")?;
        output.header("Warnings")?;
        for w in &report.warnings {
            output.finding(w.severity, &w.message, w.field)?;
        }
    }

    if !report.compatibility_issues.is_empty() {
        output.print("")?;
        output.header("Compatibility")?;
        for issue in &report.compatibility_issues {
            output.warning(&format!("{} ({})", issue.message, issue.fields.join(", ")))?;
        }
    }

    if !report.suggestions.is_empty() {
        output.print("")?;
        output.header("Suggestions")?;
        for s in &report.suggestions {
            output.info(&s.message)?;
        }
    }

    if report.finding_count() == 0 {
        output.success("No findings")?;
    }

    Ok(())
}

/// Comma-separated names of the enabled domain flags, or `none`.
fn enabled_domains(flags: &DomainFlags) -> String {
    let names: Vec<&str> = [
        (flags.commerce, "commerce"),
        (flags.authentication, "authentication"),
        (flags.ai, "ai"),
        (flags.content, "content"),
        (flags.business, "business"),
        (flags.multilingual, "multilingual"),
        (flags.realtime, "realtime"),
    ]
    .into_iter()
    .filter_map(|(on, name)| on.then_some(name))
    .collect();

    if names.is_empty() {
        "none".into()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_domains_lists_in_fixed_order() {
        let flags = DomainFlags {
            realtime: true,
            commerce: true,
            ..DomainFlags::default()
        };
        assert_eq!(enabled_domains(&flags), "commerce, realtime");
        assert_eq!(enabled_domains(&DomainFlags::default()), "none");
    }
}
