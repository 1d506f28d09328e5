//! `planwise profile`: show the stack profile for a target/framework pair.

use serde::Serialize;

use planwise_core::domain::{
    DeploymentTarget, Framework, RenderContext, StackProfile, resolve_stack_profile,
};

use crate::{
    cli::{ProfileArgs, ReportFormat},
    error::CliResult,
    output::OutputManager,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileView<'a> {
    #[serde(flatten)]
    profile: &'a StackProfile,
    project_layout: String,
}

pub fn execute(args: ProfileArgs, output: OutputManager) -> CliResult<()> {
    let target = args.target.as_deref().map(DeploymentTarget::parse);
    let framework = args.framework.as_deref().map(Framework::parse);

    let profile = resolve_stack_profile(target.as_ref(), framework.as_ref());
    let layout = profile.render_layout(&RenderContext::new(args.name.as_str()));

    match output.resolve_format(args.format) {
        ReportFormat::Json => output.json(&ProfileView {
            profile,
            project_layout: layout,
        })?,
        ReportFormat::Human => {
            output.header(profile.display_name)?;
            output.print(profile.runtime_description)?;
            list(&output, "Best practices", profile.best_practices)?;
            list(&output, "Common errors", profile.error_patterns)?;
            list(&output, "Anti-patterns", profile.anti_patterns)?;
            output.print("")?;
            output.header("Project layout")?;
            output.print(&layout)?;
        }
    }

    Ok(())
}

fn list(output: &OutputManager, title: &str, items: &[&str]) -> CliResult<()> {
    output.print("")?;
    output.header(title)?;
    for item in items {
        output.print(&format!("  • {item}"))?;
    }
    Ok(())
}
