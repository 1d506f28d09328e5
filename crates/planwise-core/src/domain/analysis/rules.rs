//! Rule registry.
//!
//! Every rule is an independent pure function of the [`Configuration`]. A
//! rule never reads another rule's output, so evaluation order only decides
//! display order.
//!
//! # Adding a Rule
//!
//! 1. Write the check as a plain `fn`
//! 2. Add one entry to the matching table below
//! 3. Give it a unique kebab-case id (the `rule_ids_are_unique` test
//!    enforces this)

use crate::domain::configuration::Configuration;
use crate::domain::value_objects::{
    ApiStyle, Database, DeploymentTarget, Framework, Runtime, Severity, WebsiteType,
};

/// Complexity contribution before the per-rule clamp.
pub type Weigh = fn(&Configuration) -> u32;

/// Returns the rendered message when the rule fires.
pub type Check = fn(&Configuration) -> Option<String>;

/// A named rule and the kind of finding it contributes.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Adds at most `max` complexity points.
    Score {
        id: &'static str,
        max: u32,
        weigh: Weigh,
    },
    Warning {
        id: &'static str,
        severity: Severity,
        /// Dotted camelCase path of the offending field.
        field: &'static str,
        check: Check,
    },
    Compatibility {
        id: &'static str,
        fields: &'static [&'static str],
        check: Check,
    },
    Suggestion {
        id: &'static str,
        check: Check,
    },
}

impl Rule {
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Score { id, .. }
            | Self::Warning { id, .. }
            | Self::Compatibility { id, .. }
            | Self::Suggestion { id, .. } => id,
        }
    }
}

/// An ordered, immutable set of rules.
///
/// Built once and handed to the analyzer. Tests build reduced catalogs with
/// [`RuleCatalog::empty`] and [`RuleCatalog::with`].
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The production rule set, in display order.
    pub fn standard() -> Self {
        let rules = SCORE_RULES
            .iter()
            .chain(WARNING_RULES)
            .chain(COMPATIBILITY_RULES)
            .chain(SUGGESTION_RULES)
            .copied()
            .collect();
        Self { rules }
    }

    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id() == id)
    }
}

fn capped(count: usize, cap: u32) -> u32 {
    u32::try_from(count).map_or(cap, |n| n.min(cap))
}

// ── Scoring ──────────────────────────────────────────────────────────────────

pub static SCORE_RULES: &[Rule] = &[
    Rule::Score {
        id: "website-types",
        max: 3,
        weigh: |c| capped(c.project.website_types.len(), 3),
    },
    Rule::Score {
        id: "commerce",
        max: 3,
        weigh: weigh_commerce,
    },
    Rule::Score {
        id: "authentication",
        max: 2,
        weigh: |c| {
            if !c.auth.enabled {
                return 0;
            }
            1 + u32::from(c.auth.mfa || c.auth.roles.len() > 1)
        },
    },
    Rule::Score {
        id: "database",
        max: 1,
        weigh: |c| u32::from(c.has_database()),
    },
    Rule::Score {
        id: "api-style",
        max: 1,
        weigh: |c| {
            u32::from(matches!(
                c.stack.api_style,
                Some(ApiStyle::Graphql | ApiStyle::Grpc)
            ))
        },
    },
    Rule::Score {
        id: "features",
        max: 3,
        weigh: |c| capped(c.features.items.len(), 3),
    },
    Rule::Score {
        id: "business-modules",
        max: 4,
        weigh: |c| capped(c.business.modules.len(), 4),
    },
    Rule::Score {
        id: "ai",
        max: 3,
        weigh: |c| {
            if !c.integrations.ai.enabled {
                return 0;
            }
            1 + capped(c.integrations.ai.use_cases.len(), 2)
        },
    },
    Rule::Score {
        id: "internationalization",
        max: 2,
        weigh: |c| match c.project.languages.len() {
            0 | 1 => 0,
            2 | 3 => 1,
            _ => 2,
        },
    },
    Rule::Score {
        id: "automations",
        max: 2,
        weigh: |c| capped(c.workflow.automations.len(), 2),
    },
    Rule::Score {
        id: "realtime",
        max: 1,
        weigh: |c| u32::from(c.features.realtime),
    },
    Rule::Score {
        id: "multi-tenant",
        max: 2,
        weigh: |c| if c.business.multi_tenant { 2 } else { 0 },
    },
    Rule::Score {
        id: "external-apis",
        max: 2,
        weigh: |c| capped(c.integrations.external_apis.len(), 2),
    },
    Rule::Score {
        id: "environments",
        max: 1,
        weigh: |c| u32::from(c.deployment.environments.len() > 2),
    },
];

fn weigh_commerce(c: &Configuration) -> u32 {
    if !c.sells_online() {
        return 0;
    }
    let commerce = &c.commerce;
    1 + u32::from(commerce.subscriptions || commerce.inventory_tracking)
        + u32::from(commerce.payment_providers.len() > 1 || commerce.currencies.len() > 1)
}

// ── Warnings ─────────────────────────────────────────────────────────────────

pub static WARNING_RULES: &[Rule] = &[
    Rule::Warning {
        id: "no-website-type",
        severity: Severity::Warning,
        field: "project.websiteTypes",
        check: |c| {
            c.project
                .website_types
                .is_empty()
                .then(|| "No website type selected".to_string())
        },
    },
    Rule::Warning {
        id: "no-framework",
        severity: Severity::Warning,
        field: "stack.framework",
        check: |c| {
            c.stack
                .framework
                .is_none()
                .then(|| "No framework selected".to_string())
        },
    },
    Rule::Warning {
        id: "commerce-without-ssl",
        severity: Severity::Error,
        field: "security.ssl",
        check: |c| {
            (c.sells_online() && !c.security.ssl).then(|| {
                "SSL is disabled but the site takes payments; checkout requires HTTPS".to_string()
            })
        },
    },
    Rule::Warning {
        id: "auth-without-ssl",
        severity: Severity::Error,
        field: "security.ssl",
        check: |c| {
            (c.auth.enabled && !c.security.ssl && !c.sells_online()).then(|| {
                "SSL is disabled but users sign in; credentials would travel in plain text"
                    .to_string()
            })
        },
    },
    Rule::Warning {
        id: "ssl-disabled",
        severity: Severity::Warning,
        field: "security.ssl",
        check: |c| {
            (!c.security.ssl && !c.auth.enabled && !c.sells_online()).then(|| {
                "SSL is disabled; browsers flag plain HTTP sites as not secure".to_string()
            })
        },
    },
    Rule::Warning {
        id: "auth-without-methods",
        severity: Severity::Warning,
        field: "auth.methods",
        check: |c| {
            (c.auth.enabled && c.auth.methods.is_empty())
                .then(|| "Authentication is enabled but no sign-in method is selected".to_string())
        },
    },
    Rule::Warning {
        id: "subscriptions-without-auth",
        severity: Severity::Error,
        field: "auth.enabled",
        check: |c| {
            (c.commerce.subscriptions && !c.auth.enabled).then(|| {
                "Subscriptions need user accounts, but authentication is disabled".to_string()
            })
        },
    },
    Rule::Warning {
        id: "commerce-without-payment",
        severity: Severity::Warning,
        field: "commerce.paymentProviders",
        check: |c| {
            (c.sells_online() && c.commerce.payment_providers.is_empty())
                .then(|| "The site sells online but no payment provider is selected".to_string())
        },
    },
    Rule::Warning {
        id: "auth-without-database",
        severity: Severity::Warning,
        field: "stack.database",
        check: |c| {
            (c.auth.enabled && !c.has_database() && !c.auth.is_managed()).then(|| {
                "Authentication is enabled without a database or a managed identity provider"
                    .to_string()
            })
        },
    },
    Rule::Warning {
        id: "business-modules-without-auth",
        severity: Severity::Warning,
        field: "auth.enabled",
        check: |c| {
            (!c.business.modules.is_empty() && !c.auth.enabled).then(|| {
                format!(
                    "{} business module(s) selected but authentication is disabled",
                    c.business.modules.len()
                )
            })
        },
    },
    Rule::Warning {
        id: "gdpr-without-cookie-consent",
        severity: Severity::Warning,
        field: "security.cookieConsent",
        check: |c| {
            (c.security.gdpr && !c.security.cookie_consent)
                .then(|| "GDPR compliance is required but cookie consent is off".to_string())
        },
    },
    Rule::Warning {
        id: "ai-without-provider",
        severity: Severity::Warning,
        field: "integrations.ai.providers",
        check: |c| {
            (c.integrations.ai.enabled && c.integrations.ai.providers.is_empty())
                .then(|| "AI features are enabled but no model provider is selected".to_string())
        },
    },
    Rule::Warning {
        id: "multilingual-without-default",
        severity: Severity::Info,
        field: "project.defaultLanguage",
        check: |c| {
            (c.is_multilingual() && c.project.default_language.is_empty()).then(|| {
                format!(
                    "{} languages selected but no default language is set",
                    c.project.languages.len()
                )
            })
        },
    },
    Rule::Warning {
        id: "mfa-without-auth",
        severity: Severity::Info,
        field: "auth.mfa",
        check: |c| {
            (c.auth.mfa && !c.auth.enabled)
                .then(|| "MFA is on but authentication is disabled, so it has no effect".to_string())
        },
    },
    Rule::Warning {
        id: "no-project-name",
        severity: Severity::Info,
        field: "project.name",
        check: |c| {
            c.project
                .name
                .is_empty()
                .then(|| "The project has no name yet".to_string())
        },
    },
];

// ── Compatibility ────────────────────────────────────────────────────────────

pub static COMPATIBILITY_RULES: &[Rule] = &[
    Rule::Compatibility {
        id: "astro-graphql",
        fields: &["stack.framework", "stack.apiStyle"],
        check: |c| {
            let fired = c.stack.framework == Some(Framework::Astro)
                && c.stack.api_style == Some(ApiStyle::Graphql);
            fired.then(|| {
                "Framework 'astro' with API style 'graphql': Astro is content-first and has no \
                 built-in GraphQL server; host the API separately or use REST endpoints"
                    .to_string()
            })
        },
    },
    Rule::Compatibility {
        id: "trpc-non-javascript",
        fields: &["stack.framework", "stack.apiStyle"],
        check: |c| {
            let fw = c.stack.framework.as_ref()?;
            let fired = c.stack.api_style == Some(ApiStyle::Trpc)
                && !matches!(fw.runtime(), Runtime::JavaScript | Runtime::Unknown);
            fired.then(|| {
                format!("API style 'trpc' needs a TypeScript server, but framework '{fw}' is not")
            })
        },
    },
    Rule::Compatibility {
        id: "server-actions-non-nextjs",
        fields: &["stack.framework", "stack.apiStyle"],
        check: |c| {
            let fw = c.stack.framework.as_ref()?;
            let fired =
                c.stack.api_style == Some(ApiStyle::ServerActions) && *fw != Framework::NextJs;
            fired.then(|| {
                format!("API style 'server-actions' is a Next.js feature; framework '{fw}' does not provide it")
            })
        },
    },
    Rule::Compatibility {
        id: "ssg-with-database",
        fields: &["performance.rendering", "stack.database"],
        check: |c| {
            let db = c.stack.database.as_ref()?;
            (c.performance.rendering == "ssg").then(|| {
                format!(
                    "Rendering 'ssg' only reads database '{db}' at build time; \
                     runtime writes need SSR, ISR or a separate API"
                )
            })
        },
    },
    Rule::Compatibility {
        id: "cloudflare-runtime",
        fields: &["deployment.target", "stack.framework"],
        check: |c| {
            let fw = c.stack.framework.as_ref()?;
            let fired = c.deployment.target == Some(DeploymentTarget::Cloudflare)
                && matches!(fw.runtime(), Runtime::Python | Runtime::Php | Runtime::Ruby);
            fired.then(|| {
                format!("Deployment target 'cloudflare' runs JavaScript isolates and cannot host framework '{fw}'")
            })
        },
    },
    Rule::Compatibility {
        id: "serverless-long-running",
        fields: &["deployment.target", "integrations.queue", "features.realtime"],
        check: |c| {
            let target = c.deployment.target.as_ref()?;
            let fired = target.is_serverless()
                && (!c.integrations.queue.is_empty() || c.features.realtime);
            fired.then(|| {
                format!(
                    "Deployment target '{target}' runs short-lived functions; queue workers and \
                     websocket servers need a separate long-running host"
                )
            })
        },
    },
    Rule::Compatibility {
        id: "serverless-sqlite",
        fields: &["deployment.target", "stack.database"],
        check: |c| {
            let target = c.deployment.target.as_ref()?;
            let fired = target.is_serverless() && c.stack.database == Some(Database::Sqlite);
            fired.then(|| {
                format!(
                    "Database 'sqlite' writes to local disk, which deployment target '{target}' \
                     does not persist between requests"
                )
            })
        },
    },
    Rule::Compatibility {
        id: "static-host-server-features",
        fields: &["deployment.target", "stack.database", "auth.enabled"],
        check: |c| {
            let target = c.deployment.target.as_ref()?;
            let fired = target.is_static_only()
                && (c.has_database() || c.auth.enabled || c.sells_online());
            fired.then(|| {
                format!(
                    "Deployment target '{target}' serves static files only; the database, \
                     authentication or checkout need a backend elsewhere"
                )
            })
        },
    },
    Rule::Compatibility {
        id: "wordpress-serverless",
        fields: &["stack.framework", "deployment.target"],
        check: |c| {
            let target = c.deployment.target.as_ref()?;
            let fired = c.stack.framework == Some(Framework::WordPress) && target.is_serverless();
            fired.then(|| {
                format!("Framework 'wordpress' needs a PHP host; deployment target '{target}' does not provide one")
            })
        },
    },
    Rule::Compatibility {
        id: "drizzle-mongodb",
        fields: &["stack.orm", "stack.database"],
        check: |c| {
            let fired = c.stack.orm == "drizzle" && c.stack.database == Some(Database::Mongodb);
            fired.then(|| "ORM 'drizzle' supports SQL databases only, not 'mongodb'".to_string())
        },
    },
    Rule::Compatibility {
        id: "firebase-sql-orm",
        fields: &["stack.orm", "stack.database"],
        check: |c| {
            let fired = c.stack.database == Some(Database::Firebase)
                && matches!(
                    c.stack.orm.as_str(),
                    "prisma" | "drizzle" | "typeorm" | "sequelize"
                );
            fired.then(|| {
                format!(
                    "ORM '{}' targets SQL databases; database 'firebase' is a document store",
                    c.stack.orm
                )
            })
        },
    },
    Rule::Compatibility {
        id: "spa-advanced-seo",
        fields: &["stack.framework", "content.seoLevel"],
        check: |c| {
            let client_rendered = c.performance.rendering == "spa"
                || c.stack.framework.as_ref().is_some_and(Framework::is_client_only);
            (client_rendered && c.content.seo_level == "advanced").then(|| {
                "Client-side rendering with SEO level 'advanced': crawlers see an empty shell; \
                 use SSR or pre-rendering"
                    .to_string()
            })
        },
    },
];

// ── Suggestions ──────────────────────────────────────────────────────────────

pub static SUGGESTION_RULES: &[Rule] = &[
    Rule::Suggestion {
        id: "enable-csp",
        check: |c| {
            (!c.security.csp && (c.auth.enabled || c.sells_online())).then(|| {
                "Add a Content Security Policy to limit script injection on pages with user data"
                    .to_string()
            })
        },
    },
    Rule::Suggestion {
        id: "enable-rate-limiting",
        check: |c| {
            (!c.security.rate_limiting && (c.auth.enabled || c.has_api())).then(|| {
                "Rate-limit sign-in and API routes to slow down brute-force attempts".to_string()
            })
        },
    },
    Rule::Suggestion {
        id: "enable-mfa",
        check: |c| {
            let sensitive = c.sells_online() || c.business.multi_tenant || !c.business.modules.is_empty();
            (c.auth.enabled && !c.auth.mfa && sensitive).then(|| {
                "Offer multi-factor authentication for accounts that handle payments or business data"
                    .to_string()
            })
        },
    },
    Rule::Suggestion {
        id: "email-verification",
        check: |c| {
            let password_login = c
                .auth
                .methods
                .iter()
                .any(|m| m == "email-password" || m == "email");
            (c.auth.enabled && password_login && !c.auth.email_verification)
                .then(|| "Verify email addresses before activating password accounts".to_string())
        },
    },
    Rule::Suggestion {
        id: "enable-backups",
        check: |c| {
            (c.has_database() && !c.security.backups)
                .then(|| "Schedule automated database backups and test a restore".to_string())
        },
    },
    Rule::Suggestion {
        id: "enable-audit-log",
        check: |c| {
            let business = !c.business.modules.is_empty() || c.business.multi_tenant;
            (business && !c.security.audit_log).then(|| {
                "Keep an audit log of administrative actions in business modules".to_string()
            })
        },
    },
    Rule::Suggestion {
        id: "add-testing",
        check: |c| {
            (c.stack.framework.is_some() && c.stack.testing.is_empty())
                .then(|| "Pick a testing setup (unit and end-to-end) before the first feature lands".to_string())
        },
    },
    Rule::Suggestion {
        id: "add-ci-cd",
        check: |c| {
            (c.deployment.target.is_some() && c.deployment.ci_cd.is_empty())
                .then(|| "Set up a CI/CD pipeline that runs tests before every deploy".to_string())
        },
    },
    Rule::Suggestion {
        id: "add-error-tracking",
        check: |c| {
            (c.deployment.target.is_some() && c.deployment.error_tracking.is_empty())
                .then(|| "Add error tracking so production exceptions are reported".to_string())
        },
    },
    Rule::Suggestion {
        id: "add-staging",
        check: |c| {
            let has_staging = c.deployment.environments.iter().any(|e| e == "staging");
            (c.deployment.target.is_some() && !has_staging && (c.sells_online() || c.auth.enabled))
                .then(|| "Add a staging environment to test releases against production-like data".to_string())
        },
    },
    Rule::Suggestion {
        id: "image-optimization",
        check: |c| {
            let image_heavy = c.sells_online()
                || c.has_website_type(&WebsiteType::Portfolio)
                || c.features.file_uploads;
            (image_heavy && !c.performance.image_optimization).then(|| {
                "Enable image optimisation (responsive sizes, modern formats) for image-heavy pages"
                    .to_string()
            })
        },
    },
    Rule::Suggestion {
        id: "enable-sitemap",
        check: |c| {
            let publishes = c.content.blog || c.project.website_types.iter().any(WebsiteType::is_content_shaped);
            (publishes && !c.content.sitemap)
                .then(|| "Generate a sitemap.xml so search engines find every page".to_string())
        },
    },
    Rule::Suggestion {
        id: "add-caching",
        check: |c| {
            let fired = c.has_database()
                && c.integrations.cache.is_empty()
                && c.performance.caching_strategy.is_empty();
            fired.then(|| "Choose a caching strategy for frequently read data".to_string())
        },
    },
    Rule::Suggestion {
        id: "analytics-consent",
        check: |c| {
            (!c.content.analytics.is_empty() && !c.security.cookie_consent && !c.security.gdpr)
                .then(|| "Analytics usually needs a cookie consent banner for EU visitors".to_string())
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rule_ids_are_unique() {
        let catalog = RuleCatalog::standard();
        let mut seen = HashSet::new();
        for rule in catalog.rules() {
            assert!(seen.insert(rule.id()), "duplicate rule id {}", rule.id());
        }
    }

    #[test]
    fn warning_fields_are_dotted_paths() {
        for rule in WARNING_RULES {
            if let Rule::Warning { id, field, .. } = rule {
                assert!(field.contains('.'), "rule {id} has field {field}");
            }
        }
        for rule in COMPATIBILITY_RULES {
            if let Rule::Compatibility { id, fields, .. } = rule {
                assert!(fields.len() >= 2, "rule {id} must name at least two fields");
            }
        }
    }

    #[test]
    fn score_rules_respect_their_max_on_a_maximal_configuration() {
        let mut c = Configuration::default();
        c.project.website_types = vec![WebsiteType::Ecommerce; 6];
        c.business.modules = (0..9).map(|i| format!("m{i}")).collect();
        c.features.items = (0..9).map(|i| format!("f{i}")).collect();
        c.commerce.subscriptions = true;
        c.commerce.payment_providers = vec!["stripe".into(), "paypal".into()];
        c.auth.enabled = true;
        c.auth.mfa = true;
        c.integrations.ai.enabled = true;
        c.integrations.ai.use_cases = vec!["a".into(), "b".into(), "c".into()];
        c.project.languages = (0..6).map(|i| format!("l{i}")).collect();

        for rule in SCORE_RULES {
            if let Rule::Score { id, max, weigh } = rule {
                assert!(weigh(&c) <= *max, "rule {id} exceeds its max");
            }
        }
    }

    #[test]
    fn catalog_builder_keeps_order() {
        let catalog = RuleCatalog::empty()
            .with(SUGGESTION_RULES[0])
            .with(WARNING_RULES[0]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.rules()[0].id(), "enable-csp");
        assert!(catalog.find("no-website-type").is_some());
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn static_host_rule_names_the_target() {
        let rule = *RuleCatalog::standard()
            .find("static-host-server-features")
            .unwrap();
        let analyzer = crate::domain::analysis::Analyzer::new(RuleCatalog::empty().with(rule));

        let mut c = Configuration::default();
        c.deployment.target = Some(DeploymentTarget::GithubPages);
        assert!(analyzer.analyze(&c).compatibility_issues.is_empty());

        c.auth.enabled = true;
        let report = analyzer.analyze(&c);
        assert_eq!(report.compatibility_issues.len(), 1);
        assert!(report.compatibility_issues[0].message.contains("'github-pages'"));

        c.deployment.target = Some(DeploymentTarget::Vercel);
        assert!(analyzer.analyze(&c).compatibility_issues.is_empty());
    }
}
