//! The development concept: a planning document for stakeholders.

use super::fragments as f;
use super::{DocumentKind, Draft, GeneratedDocument, Section};

pub(super) fn compose(d: &Draft<'_>) -> GeneratedDocument {
    let c = &d.config;
    let mut sections = vec![
        Section::new("summary", "Executive Summary", f::project_overview(d)),
        Section::new("goals", "Goals & Audience", goals(d)),
        Section::new("scope", "Feature Scope", f::feature_scope(d)),
        Section::new("architecture", "Architecture", architecture(d)),
        Section::new("data-model", "Data Model", f::data_model(d)),
        Section::new("api", "API Surface", f::api_surface(d)),
        Section::new("components", "UI Components", f::components(d)),
    ];

    if c.auth.enabled {
        sections.push(Section::new("auth", "Authentication & Access", f::auth(d)));
    }
    if c.sells_online() {
        sections.push(Section::new("commerce", "Commerce", f::commerce(d)));
    }
    if c.has_content_publishing() {
        sections.push(Section::new("content", "Content Strategy", f::content(d)));
    }
    if c.integrations.ai.enabled {
        sections.push(Section::new("ai", "AI Capabilities", f::ai(d)));
    }
    if f::has_integrations(c) {
        sections.push(Section::new("integrations", "Third-Party Integrations", f::integrations(d)));
    }
    if c.is_multilingual() {
        sections.push(Section::new("i18n", "Internationalisation", f::i18n(d)));
    }
    if f::has_workflow(c) {
        sections.push(Section::new("workflow", "Workflows & Automation", f::workflow(d)));
    }
    if !c.business.modules.is_empty() || c.business.multi_tenant {
        sections.push(Section::new("business", "Business Modules", f::business(d)));
    }

    sections.extend([
        Section::new("security", "Security & Compliance", f::security(d)),
        Section::new("performance", "Performance", f::performance(d)),
        Section::new("deployment", "Deployment & Operations", f::deployment(d)),
        Section::new("roadmap", "Roadmap", roadmap(d)),
        Section::new("risks", "Risks", f::risks(d)),
    ]);

    GeneratedDocument {
        kind: DocumentKind::DevelopmentConcept,
        title: format!("Development Concept: {}", d.ctx.project_name()),
        sections,
    }
}

fn goals(d: &Draft<'_>) -> String {
    let p = &d.config.project;
    let pick = |value: &str, fallback: &str| {
        if value.trim().is_empty() {
            fallback.to_string()
        } else {
            value.trim().to_string()
        }
    };
    f::bullets(&[
        format!("Primary goal: {}", pick(&p.primary_goal, "To be defined with stakeholders")),
        format!("Target audience: {}", pick(&p.target_audience, "To be defined")),
        format!("Planned features: {}", d.config.feature_count()),
    ])
}

fn architecture(d: &Draft<'_>) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        d.profile.runtime_description,
        f::stack_table(d),
        f::project_structure(d)
    )
}

/// Phase titles only; the item-level plan lives in the init prompt.
fn roadmap(d: &Draft<'_>) -> String {
    let milestones: Vec<String> = d
        .plan
        .phases
        .iter()
        .map(|p| {
            format!(
                "Milestone {}: {} ({} {})",
                p.number,
                p.title,
                p.items.len(),
                if p.items.len() == 1 { "task" } else { "tasks" }
            )
        })
        .collect();
    f::bullets(&milestones)
}
