//! Section bodies shared by both documents.
//!
//! Each function renders one Markdown body from a [`Draft`]. Conditional
//! fragments come with a gate predicate; the documents decide order and
//! headings.

use crate::domain::configuration::Configuration;
use crate::domain::value_objects::CatalogGroup;

use super::Draft;

const NOT_DECIDED: &str = "Not decided";
const NONE_SELECTED: &str = "None selected";

// ── Markdown helpers ─────────────────────────────────────────────────────────

pub(super) fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = format!("| {} |\n", headers.join(" | "));
    out.push_str(&format!(
        "|{}\n",
        headers.iter().map(|_| "---|").collect::<String>()
    ));
    for row in rows {
        out.push_str(&format!("| {} |\n", row.join(" | ")));
    }
    out.trim_end().to_string()
}

pub(super) fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn or_default(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

// ── Unconditional fragments ──────────────────────────────────────────────────

pub(super) fn project_overview(d: &Draft<'_>) -> String {
    let p = &d.config.project;
    let types: Vec<&str> = p.website_types.iter().map(|t| t.as_str()).collect();
    let rows = vec![
        vec!["Name".into(), d.ctx.project_name().to_string()],
        vec!["Description".into(), or_default(&p.description, "No description yet")],
        vec![
            "Type".into(),
            d.labels.join(CatalogGroup::WebsiteType, &types, NONE_SELECTED),
        ],
        vec!["Audience".into(), or_default(&p.target_audience, NOT_DECIDED)],
        vec!["Primary goal".into(), or_default(&p.primary_goal, NOT_DECIDED)],
        vec![
            "Languages".into(),
            d.labels.join(CatalogGroup::Locale, &p.languages, "Default only"),
        ],
    ];
    table(&["Field", "Value"], &rows)
}

pub(super) fn stack_table(d: &Draft<'_>) -> String {
    let s = &d.config.stack;
    let label = |group, value: Option<&str>| match value {
        Some(v) if !v.is_empty() => d.labels.label_or_raw(group, v),
        _ => NOT_DECIDED.to_string(),
    };
    let rows = vec![
        vec![
            "Framework".into(),
            label(CatalogGroup::Framework, s.framework.as_ref().map(|f| f.as_str())),
        ],
        vec!["Language".into(), or_default(&s.language, NOT_DECIDED)],
        vec!["Styling".into(), label(CatalogGroup::Styling, Some(s.styling.as_str()))],
        vec!["UI library".into(), or_default(&s.ui_library, NOT_DECIDED)],
        vec!["State management".into(), or_default(&s.state_management, NOT_DECIDED)],
        vec![
            "Database".into(),
            label(CatalogGroup::Database, s.database.as_ref().map(|db| db.as_str())),
        ],
        vec!["ORM".into(), or_default(&s.orm, NOT_DECIDED)],
        vec![
            "API style".into(),
            label(CatalogGroup::ApiStyle, s.api_style.as_ref().map(|a| a.as_str())),
        ],
        vec![
            "Hosting".into(),
            label(
                CatalogGroup::DeploymentTarget,
                d.config.deployment.target.as_ref().map(|t| t.as_str()),
            ),
        ],
        vec!["Package manager".into(), or_default(&s.package_manager, NOT_DECIDED)],
        vec![
            "Testing".into(),
            d.labels.join(CatalogGroup::Testing, &s.testing, NOT_DECIDED),
        ],
    ];
    table(&["Layer", "Choice"], &rows)
}

pub(super) fn project_structure(d: &Draft<'_>) -> String {
    format!(
        "Profile: **{}**\n\n```text\n{}\n```",
        d.profile.display_name,
        d.profile.render_layout(&d.ctx)
    )
}

pub(super) fn design_system(d: &Draft<'_>) -> String {
    let design = &d.config.design;
    let rows = vec![
        vec!["Style".into(), or_default(&design.style, NOT_DECIDED)],
        vec!["Color scheme".into(), or_default(&design.color_scheme, NOT_DECIDED)],
        vec!["Typography".into(), or_default(&design.typography, NOT_DECIDED)],
        vec!["Dark mode".into(), yes_no(design.dark_mode).into()],
        vec!["Responsive".into(), yes_no(design.responsive).into()],
        vec![
            "Accessibility".into(),
            or_default(&design.accessibility_level.to_ascii_uppercase(), NOT_DECIDED),
        ],
    ];
    table(&["Aspect", "Choice"], &rows)
}

pub(super) fn data_model(d: &Draft<'_>) -> String {
    if d.artifacts.entities.is_empty() {
        return "No persistent entities are required yet.".into();
    }
    let rows: Vec<Vec<String>> = d
        .artifacts
        .entities
        .iter()
        .map(|e| vec![format!("`{}`", e.name), e.fields.join(", ")])
        .collect();
    table(&["Entity", "Fields"], &rows)
}

pub(super) fn api_surface(d: &Draft<'_>) -> String {
    let style = d
        .config
        .stack
        .api_style
        .as_ref()
        .map(|a| d.labels.label_or_raw(CatalogGroup::ApiStyle, a.as_str()))
        .unwrap_or_else(|| NOT_DECIDED.into());
    if d.artifacts.endpoints.is_empty() {
        return format!("API style: {style}\n\nNo server endpoints are required yet.");
    }
    let rows: Vec<Vec<String>> = d
        .artifacts
        .endpoints
        .iter()
        .map(|e| vec![e.method.to_string(), format!("`{}`", e.path), e.purpose.clone()])
        .collect();
    format!(
        "API style: {style}\n\n{}",
        table(&["Method", "Path", "Purpose"], &rows)
    )
}

pub(super) fn components(d: &Draft<'_>) -> String {
    bullets(&d.artifacts.components)
}

pub(super) fn security(d: &Draft<'_>) -> String {
    let s = &d.config.security;
    let mut lines = vec![
        format!("HTTPS everywhere: {}", yes_no(s.ssl)),
        format!("Content Security Policy: {}", yes_no(s.csp)),
        format!("Rate limiting: {}", yes_no(s.rate_limiting)),
        format!("GDPR compliance: {}", yes_no(s.gdpr)),
        format!("Cookie consent: {}", yes_no(s.cookie_consent)),
        format!("Automated backups: {}", yes_no(s.backups)),
        format!("Audit log: {}", yes_no(s.audit_log)),
        format!("DDoS protection: {}", yes_no(s.ddos_protection)),
    ];
    if !s.secrets_management.is_empty() {
        lines.push(format!("Secrets management: {}", s.secrets_management));
    }
    if !s.cors_origins.is_empty() {
        lines.push(format!("CORS origins: {}", s.cors_origins.join(", ")));
    }
    bullets(&lines)
}

pub(super) fn performance(d: &Draft<'_>) -> String {
    let p = &d.config.performance;
    bullets(&[
        format!("Rendering: {}", or_default(&p.rendering.to_ascii_uppercase(), NOT_DECIDED)),
        format!("Caching strategy: {}", or_default(&p.caching_strategy, NOT_DECIDED)),
        format!("Image optimisation: {}", yes_no(p.image_optimization)),
        format!("CDN: {}", yes_no(p.cdn)),
        format!("Performance budget: {}", yes_no(p.performance_budget)),
    ])
}

pub(super) fn deployment(d: &Draft<'_>) -> String {
    let dep = &d.config.deployment;
    let target = dep
        .target
        .as_ref()
        .map(|t| d.labels.label_or_raw(CatalogGroup::DeploymentTarget, t.as_str()))
        .unwrap_or_else(|| NOT_DECIDED.into());
    bullets(&[
        format!("Hosting: {target}"),
        format!("Environments: {}", or_default(&dep.environments.join(", "), "production")),
        format!(
            "CI/CD: {}",
            if dep.ci_cd.is_empty() {
                NOT_DECIDED.to_string()
            } else {
                d.labels.label_or_raw(CatalogGroup::CiCd, &dep.ci_cd)
            }
        ),
        format!("Containerised: {}", yes_no(dep.containerized)),
        format!("Custom domain: {}", or_default(&dep.custom_domain, NOT_DECIDED)),
        format!("Monitoring: {}", or_default(&dep.monitoring.join(", "), NOT_DECIDED)),
        format!("Error tracking: {}", or_default(&dep.error_tracking, NOT_DECIDED)),
        format!("Region: {}", or_default(&dep.region, NOT_DECIDED)),
    ])
}

pub(super) fn feature_scope(d: &Draft<'_>) -> String {
    let c = &d.config;
    let mut out = format!(
        "**Features:** {}",
        d.labels.join(CatalogGroup::Feature, &c.features.items, NONE_SELECTED)
    );
    let mut extras = Vec::new();
    if !c.features.search.is_empty() {
        extras.push(format!("Search via {}", c.features.search));
    }
    if c.features.realtime {
        extras.push("Realtime updates".to_string());
    }
    if !c.features.notifications.is_empty() {
        extras.push(format!("Notifications: {}", c.features.notifications.join(", ")));
    }
    if c.features.file_uploads {
        extras.push("File uploads".to_string());
    }
    if c.features.pwa {
        extras.push("Installable PWA".to_string());
    }
    if c.features.offline {
        extras.push("Offline support".to_string());
    }
    if !extras.is_empty() {
        out.push_str("\n\n");
        out.push_str(&bullets(&extras));
    }
    out
}

pub(super) fn build_plan(d: &Draft<'_>) -> String {
    d.plan.to_markdown()
}

pub(super) fn best_practices(d: &Draft<'_>) -> String {
    bullets(d.profile.best_practices)
}

pub(super) fn constraints(d: &Draft<'_>) -> String {
    let avoid: Vec<String> = d
        .profile
        .anti_patterns
        .iter()
        .map(|a| format!("Avoid: {a}"))
        .collect();
    let mut all = d.artifacts.constraints.clone();
    all.extend(avoid);
    bullets(&all)
}

pub(super) fn risks(d: &Draft<'_>) -> String {
    format!(
        "**Common failure modes on this stack**\n\n{}\n\n**Anti-patterns**\n\n{}",
        bullets(d.profile.error_patterns),
        bullets(d.profile.anti_patterns)
    )
}

// ── Conditional fragments ────────────────────────────────────────────────────

pub(super) fn auth(d: &Draft<'_>) -> String {
    let a = &d.config.auth;
    let mut lines = vec![
        format!("Provider: {}", or_default(&a.provider, "custom")),
        format!(
            "Sign-in methods: {}",
            d.labels.join(CatalogGroup::AuthMethod, &a.methods, NONE_SELECTED)
        ),
        format!("Multi-factor authentication: {}", yes_no(a.mfa)),
        format!("Email verification: {}", yes_no(a.email_verification)),
        format!("Sessions: {}", or_default(&a.session_strategy, NOT_DECIDED)),
    ];
    if !a.roles.is_empty() {
        lines.push(format!("Roles: {}", a.roles.join(", ")));
    }
    bullets(&lines)
}

/// Everything commerce-specific, including its own entities and routes.
pub(super) fn commerce(d: &Draft<'_>) -> String {
    let c = &d.config.commerce;
    let mut lines = vec![
        format!(
            "Payment providers: {}",
            d.labels.join(CatalogGroup::PaymentProvider, &c.payment_providers, NONE_SELECTED)
        ),
        format!("Currencies: {}", or_default(&c.currencies.join(", "), NOT_DECIDED)),
        format!("Product types: {}", or_default(&c.product_types.join(", "), NOT_DECIDED)),
        format!("Checkout flow: {}", or_default(&c.checkout_flow, NOT_DECIDED)),
        format!("Shipping: {}", yes_no(c.shipping)),
        format!("Tax calculation: {}", yes_no(c.tax_calculation)),
        format!("Inventory tracking: {}", yes_no(c.inventory_tracking)),
        format!("Subscriptions: {}", yes_no(c.subscriptions)),
    ];

    let mut entities = vec![
        vec!["`Product`".to_string(), "id, name, slug, price, currency, images".to_string()],
        vec!["`Cart`".to_string(), "id, sessionId, items, total".to_string()],
        vec!["`Order`".to_string(), "id, customerId, items, total, status, paidAt".to_string()],
        vec!["`Payment`".to_string(), "id, orderId, provider, amount, status".to_string()],
    ];
    if c.subscriptions {
        entities.push(vec![
            "`Subscription`".to_string(),
            "id, customerId, plan, status, renewsAt".to_string(),
        ]);
    }
    if c.shipping {
        entities.push(vec![
            "`Shipment`".to_string(),
            "id, orderId, carrier, trackingNumber".to_string(),
        ]);
    }

    let routes = [
        "`GET /api/products` list the catalogue",
        "`POST /api/cart` update the cart",
        "`POST /api/checkout` create a checkout session",
        "`POST /api/webhooks/payments` confirm payments",
    ];

    format!(
        "{}\n\n{}\n\n**Routes**\n\n{}\n\nNever trust prices sent by the client; recompute totals on the server and confirm orders only from verified payment webhooks.",
        bullets(&lines),
        table(&["Entity", "Fields"], &entities),
        bullets(&routes)
    )
}

pub(super) fn content(d: &Draft<'_>) -> String {
    let c = &d.config.content;
    let cms = if c.cms.is_empty() {
        "Files in the repository".to_string()
    } else {
        d.labels.label_or_raw(CatalogGroup::Cms, &c.cms)
    };
    bullets(&[
        format!("CMS: {cms}"),
        format!("Blog: {}", yes_no(c.blog)),
        format!("Newsletter: {}", yes_no(c.newsletter)),
        format!("SEO level: {}", or_default(&c.seo_level, NOT_DECIDED)),
        format!("Sitemap: {}", yes_no(c.sitemap)),
        format!("RSS feed: {}", yes_no(c.rss)),
        format!("Analytics: {}", or_default(&c.analytics, NOT_DECIDED)),
        format!("Media storage: {}", or_default(&c.media_storage, NOT_DECIDED)),
    ])
}

pub(super) fn ai(d: &Draft<'_>) -> String {
    let ai = &d.config.integrations.ai;
    bullets(&[
        format!(
            "Providers: {}",
            d.labels.join(CatalogGroup::AiProvider, &ai.providers, NONE_SELECTED)
        ),
        format!("Use cases: {}", or_default(&ai.use_cases.join(", "), NOT_DECIDED)),
        format!("Vector store: {}", or_default(&ai.vector_store, "None")),
        format!("Streaming responses: {}", yes_no(ai.streaming)),
        "Keep API keys server-side and log prompts without personal data".to_string(),
    ])
}

pub(super) fn has_integrations(config: &Configuration) -> bool {
    let i = &config.integrations;
    !i.email_provider.is_empty()
        || !i.queue.is_empty()
        || !i.cache.is_empty()
        || !i.external_apis.is_empty()
        || i.webhooks
}

pub(super) fn integrations(d: &Draft<'_>) -> String {
    let i = &d.config.integrations;
    let mut lines = Vec::new();
    if !i.email_provider.is_empty() {
        lines.push(format!("Email: {}", i.email_provider));
    }
    if !i.queue.is_empty() {
        lines.push(format!("Queue: {}", i.queue));
    }
    if !i.cache.is_empty() {
        lines.push(format!("Cache: {}", i.cache));
    }
    if !i.external_apis.is_empty() {
        lines.push(format!("External APIs: {}", i.external_apis.join(", ")));
    }
    if i.webhooks {
        lines.push("Incoming webhooks with signature verification".to_string());
    }
    bullets(&lines)
}

pub(super) fn i18n(d: &Draft<'_>) -> String {
    let p = &d.config.project;
    bullets(&[
        format!(
            "Locales: {}",
            d.labels.join(CatalogGroup::Locale, &p.languages, NONE_SELECTED)
        ),
        format!("Default locale: {}", or_default(&p.default_language, NOT_DECIDED)),
        "Keep every user-facing string in translation files".to_string(),
        "Localise dates, numbers and currencies per locale".to_string(),
    ])
}

pub(super) fn has_workflow(config: &Configuration) -> bool {
    let w = &config.workflow;
    !w.automations.is_empty() || w.scheduled_jobs || w.approval_flows
}

pub(super) fn workflow(d: &Draft<'_>) -> String {
    let w = &d.config.workflow;
    let mut lines: Vec<String> = w
        .automations
        .iter()
        .map(|a| format!("Automation: {a}"))
        .collect();
    lines.push(format!("Scheduled jobs: {}", yes_no(w.scheduled_jobs)));
    lines.push(format!("Approval flows: {}", yes_no(w.approval_flows)));
    bullets(&lines)
}

pub(super) fn business(d: &Draft<'_>) -> String {
    let b = &d.config.business;
    bullets(&[
        format!(
            "Modules: {}",
            d.labels.join(CatalogGroup::BusinessModule, &b.modules, NONE_SELECTED)
        ),
        format!("Team size: {}", or_default(&b.team_size, NOT_DECIDED)),
        format!("Multi-tenant: {}", yes_no(b.multi_tenant)),
        format!("Expected users: {}", or_default(&b.expected_users, NOT_DECIDED)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_renders_header_separator_and_rows() {
        let md = table(&["A", "B"], &[vec!["1".into(), "2".into()]]);
        assert_eq!(md, "| A | B |\n|---|---|\n| 1 | 2 |");
    }

    #[test]
    fn bullets_join_lines() {
        assert_eq!(bullets(&["one", "two"]), "- one\n- two");
    }
}
