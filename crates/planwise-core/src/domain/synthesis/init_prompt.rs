//! The init prompt: a build brief addressed to the implementer.

use super::fragments as f;
use super::{DocumentKind, Draft, GeneratedDocument, Section};

pub(super) fn compose(d: &Draft<'_>) -> GeneratedDocument {
    let c = &d.config;
    let mut sections = vec![
        Section::new("role", "Role & Objective", role(d)),
        Section::new("project", "Project Overview", f::project_overview(d)),
        Section::new("stack", "Technology Stack", f::stack_table(d)),
        Section::new("structure", "Project Structure", f::project_structure(d)),
        Section::new("design", "Design System", f::design_system(d)),
        Section::new("data-model", "Data Model", f::data_model(d)),
        Section::new("api", "API Surface", f::api_surface(d)),
        Section::new("components", "UI Components", f::components(d)),
    ];

    if c.auth.enabled {
        sections.push(Section::new("auth", "Authentication", f::auth(d)));
    }
    if c.sells_online() {
        sections.push(Section::new("commerce", "Commerce", f::commerce(d)));
    }
    if c.has_content_publishing() {
        sections.push(Section::new("content", "Content & Publishing", f::content(d)));
    }
    if c.integrations.ai.enabled {
        sections.push(Section::new("ai", "AI Features", f::ai(d)));
    }
    if f::has_integrations(c) {
        sections.push(Section::new("integrations", "Integrations", f::integrations(d)));
    }
    if c.is_multilingual() {
        sections.push(Section::new("i18n", "Internationalisation", f::i18n(d)));
    }

    sections.extend([
        Section::new("security", "Security Requirements", f::security(d)),
        Section::new("build-plan", "Build Plan", f::build_plan(d)),
        Section::new("best-practices", "Best Practices", f::best_practices(d)),
        Section::new("constraints", "Constraints", f::constraints(d)),
        Section::new("deliverables", "Deliverables", deliverables(d)),
    ]);

    GeneratedDocument {
        kind: DocumentKind::InitPrompt,
        title: format!("Init Prompt: {}", d.ctx.project_name()),
        sections,
    }
}

fn role(d: &Draft<'_>) -> String {
    let description = d.config.project.description.trim().trim_end_matches('.');
    let mut out = format!(
        "You are a senior engineer building **{}** on {}.",
        d.ctx.project_name(),
        d.profile.display_name
    );
    if !description.is_empty() {
        out.push_str(&format!(" {description}."));
    }
    out.push_str(
        "\n\nWork through the build plan phase by phase. Keep every phase shippable \
         and ask before deviating from a listed choice.",
    );
    out
}

fn deliverables(d: &Draft<'_>) -> String {
    f::bullets(&[
        format!(
            "A working `{}` repository following the project structure above",
            d.ctx.get("PROJECT_NAME_KEBAB").unwrap_or_default()
        ),
        "A README with setup, environment variables and deployment steps".to_string(),
        "Automated tests for every phase of the build plan".to_string(),
        "A short changelog of decisions that differ from this brief".to_string(),
    ])
}
