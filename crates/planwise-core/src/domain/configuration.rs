//! The wizard configuration snapshot.
//!
//! A [`Configuration`] is owned and edited field-by-field by the wizard; the
//! engine only ever reads an immutable snapshot. Every section and field is
//! `#[serde(default)]`, so a document that omits a nested record (older
//! schema, partially filled wizard) merges with the defaults instead of
//! failing. Missing lists mean "nothing selected".
//!
//! Wire keys are camelCase to match the wizard's form state.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::{ApiStyle, Database, DeploymentTarget, Framework, WebsiteType};

/// Full set of user-selected settings for one wizard session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    pub project: ProjectSection,
    pub design: DesignSection,
    pub stack: StackSection,
    pub auth: AuthSection,
    pub security: SecuritySection,
    pub commerce: CommerceSection,
    pub content: ContentSection,
    pub features: FeaturesSection,
    pub integrations: IntegrationsSection,
    pub business: BusinessSection,
    pub workflow: WorkflowSection,
    pub performance: PerformanceSection,
    pub deployment: DeploymentSection,
}

/// Identity of the project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectSection {
    pub name: String,
    pub description: String,
    pub website_types: Vec<WebsiteType>,
    pub target_audience: String,
    pub primary_goal: String,
    /// Locale ids, e.g. `en`, `de`.
    pub languages: Vec<String>,
    pub default_language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesignSection {
    pub style: String,
    pub color_scheme: String,
    pub typography: String,
    pub dark_mode: bool,
    pub accessibility_level: String,
    pub responsive: bool,
}

impl Default for DesignSection {
    fn default() -> Self {
        Self {
            style: String::new(),
            color_scheme: String::new(),
            typography: String::new(),
            dark_mode: false,
            accessibility_level: String::new(),
            responsive: true,
        }
    }
}

/// Technology choices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StackSection {
    #[serde(
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub framework: Option<Framework>,
    pub language: String,
    pub styling: String,
    pub ui_library: String,
    pub state_management: String,
    #[serde(
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub database: Option<Database>,
    pub orm: String,
    #[serde(
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_style: Option<ApiStyle>,
    pub package_manager: String,
    pub testing: Vec<String>,
    pub monorepo: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthSection {
    pub enabled: bool,
    /// Identity provider id (`custom`, `clerk`, `auth0`, `supabase`, ...).
    pub provider: String,
    pub methods: Vec<String>,
    pub mfa: bool,
    pub roles: Vec<String>,
    pub session_strategy: String,
    pub email_verification: bool,
}

impl AuthSection {
    /// Providers that keep user records on their side.
    pub fn is_managed(&self) -> bool {
        matches!(
            self.provider.as_str(),
            "clerk" | "auth0" | "supabase" | "firebase" | "cognito"
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecuritySection {
    pub ssl: bool,
    pub csp: bool,
    pub rate_limiting: bool,
    pub cors_origins: Vec<String>,
    pub gdpr: bool,
    pub cookie_consent: bool,
    pub backups: bool,
    pub audit_log: bool,
    pub secrets_management: String,
    pub ddos_protection: bool,
}

impl Default for SecuritySection {
    fn default() -> Self {
        Self {
            ssl: true,
            csp: false,
            rate_limiting: false,
            cors_origins: Vec::new(),
            gdpr: false,
            cookie_consent: false,
            backups: false,
            audit_log: false,
            secrets_management: String::new(),
            ddos_protection: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommerceSection {
    pub enabled: bool,
    pub payment_providers: Vec<String>,
    pub currencies: Vec<String>,
    pub product_types: Vec<String>,
    pub shipping: bool,
    pub tax_calculation: bool,
    pub inventory_tracking: bool,
    pub subscriptions: bool,
    pub checkout_flow: String,
}

/// Publishing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentSection {
    pub cms: String,
    pub blog: bool,
    pub newsletter: bool,
    pub seo_level: String,
    pub sitemap: bool,
    pub rss: bool,
    pub analytics: String,
    pub media_storage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturesSection {
    pub items: Vec<String>,
    pub search: String,
    pub realtime: bool,
    pub notifications: Vec<String>,
    pub file_uploads: bool,
    pub pwa: bool,
    pub offline: bool,
}

impl FeaturesSection {
    pub fn has(&self, id: &str) -> bool {
        self.items.iter().any(|f| f == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntegrationsSection {
    pub email_provider: String,
    pub queue: String,
    pub cache: String,
    pub external_apis: Vec<String>,
    pub webhooks: bool,
    pub ai: AiSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AiSection {
    pub enabled: bool,
    pub providers: Vec<String>,
    pub use_cases: Vec<String>,
    pub vector_store: String,
    pub streaming: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessSection {
    pub modules: Vec<String>,
    pub team_size: String,
    pub multi_tenant: bool,
    pub expected_users: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkflowSection {
    pub automations: Vec<String>,
    pub scheduled_jobs: bool,
    pub approval_flows: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PerformanceSection {
    /// `ssr`, `ssg`, `isr`, `spa` or `hybrid`.
    pub rendering: String,
    pub caching_strategy: String,
    pub image_optimization: bool,
    pub cdn: bool,
    pub performance_budget: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentSection {
    #[serde(
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub target: Option<DeploymentTarget>,
    pub environments: Vec<String>,
    pub ci_cd: String,
    pub containerized: bool,
    pub custom_domain: String,
    pub monitoring: Vec<String>,
    pub error_tracking: String,
    pub region: String,
}

// ── Derived predicates ────────────────────────────────────────────────────────

impl Configuration {
    /// Whether anything will be sold through the site.
    pub fn sells_online(&self) -> bool {
        self.commerce.enabled
            || self
                .project
                .website_types
                .iter()
                .any(WebsiteType::is_commerce_shaped)
    }

    pub fn has_website_type(&self, kind: &WebsiteType) -> bool {
        self.project.website_types.contains(kind)
    }

    pub fn is_multilingual(&self) -> bool {
        self.project.languages.len() > 1
    }

    pub fn has_database(&self) -> bool {
        self.stack.database.is_some()
    }

    pub fn has_api(&self) -> bool {
        self.stack.api_style.is_some()
    }

    pub fn has_content_publishing(&self) -> bool {
        !self.content.cms.is_empty() || self.content.blog || self.content.newsletter
    }

    pub fn has_background_work(&self) -> bool {
        !self.integrations.queue.is_empty()
            || self.workflow.scheduled_jobs
            || !self.workflow.automations.is_empty()
    }

    /// Names of the top-level sections that carry a meaningful choice.
    pub fn configured_sections(&self) -> Vec<&'static str> {
        let checks: [(&'static str, bool); 13] = [
            (
                "project",
                !self.project.name.is_empty() || !self.project.website_types.is_empty(),
            ),
            (
                "design",
                !self.design.style.is_empty()
                    || !self.design.color_scheme.is_empty()
                    || !self.design.accessibility_level.is_empty(),
            ),
            (
                "stack",
                self.stack.framework.is_some() || self.stack.database.is_some(),
            ),
            ("auth", self.auth.enabled),
            (
                "security",
                self.security.csp
                    || self.security.rate_limiting
                    || self.security.gdpr
                    || self.security.backups
                    || self.security.audit_log,
            ),
            ("commerce", self.sells_online()),
            ("content", self.has_content_publishing()),
            ("features", !self.features.items.is_empty()),
            (
                "integrations",
                !self.integrations.email_provider.is_empty()
                    || !self.integrations.queue.is_empty()
                    || !self.integrations.external_apis.is_empty()
                    || self.integrations.ai.enabled,
            ),
            ("business", !self.business.modules.is_empty()),
            ("workflow", !self.workflow.automations.is_empty()),
            (
                "performance",
                !self.performance.rendering.is_empty()
                    || !self.performance.caching_strategy.is_empty(),
            ),
            ("deployment", self.deployment.target.is_some()),
        ];

        checks
            .into_iter()
            .filter(|(_, set)| *set)
            .map(|(name, _)| name)
            .collect()
    }

    /// Sum of all feature-like list lengths.
    pub fn feature_count(&self) -> usize {
        self.features.items.len()
            + self.business.modules.len()
            + self.workflow.automations.len()
            + self.integrations.external_apis.len()
            + self.integrations.ai.use_cases.len()
    }

    /// Boundary normalisation: trims values and drops blank list entries.
    ///
    /// Every engine entry point (`analyze`, ranking and synthesis) applies
    /// it to its own copy, so callers may pass raw snapshots. It never
    /// alters a non-blank choice and is idempotent.
    pub fn normalized(mut self) -> Self {
        self.project.name = self.project.name.trim().to_string();
        self.project.default_language = self.project.default_language.trim().to_string();
        self.project
            .website_types
            .retain(|t| !matches!(t, WebsiteType::Other(raw) if raw.trim().is_empty()));

        for list in [
            &mut self.project.languages,
            &mut self.stack.testing,
            &mut self.auth.methods,
            &mut self.auth.roles,
            &mut self.security.cors_origins,
            &mut self.commerce.payment_providers,
            &mut self.commerce.currencies,
            &mut self.commerce.product_types,
            &mut self.features.items,
            &mut self.features.notifications,
            &mut self.integrations.external_apis,
            &mut self.integrations.ai.providers,
            &mut self.integrations.ai.use_cases,
            &mut self.business.modules,
            &mut self.workflow.automations,
            &mut self.deployment.environments,
            &mut self.deployment.monitoring,
        ] {
            clean_list(list);
        }

        self
    }
}

fn clean_list(list: &mut Vec<String>) {
    for item in list.iter_mut() {
        let trimmed = item.trim();
        if trimmed.len() != item.len() {
            *item = trimmed.to_string();
        }
    }
    list.retain(|item| !item.is_empty());
}

/// Deserialize an optional value domain, treating `""` and `null` as unset.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(T::from(trimmed.to_string()))
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_merge_with_defaults() {
        let cfg: Configuration =
            serde_json::from_str(r#"{ "project": { "name": "Shop" } }"#).unwrap();
        assert_eq!(cfg.project.name, "Shop");
        assert!(cfg.security.ssl, "ssl defaults to on");
        assert!(cfg.design.responsive);
        assert!(cfg.stack.framework.is_none());
        assert!(cfg.auth.methods.is_empty());
    }

    #[test]
    fn blank_enum_values_are_unset() {
        let cfg: Configuration = serde_json::from_str(
            r#"{ "stack": { "framework": "", "database": null, "apiStyle": "graphql" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.stack.framework, None);
        assert_eq!(cfg.stack.database, None);
        assert_eq!(cfg.stack.api_style, Some(ApiStyle::Graphql));
    }

    #[test]
    fn camel_case_keys_deserialize() {
        let cfg: Configuration = serde_json::from_str(
            r#"{
                "project": { "websiteTypes": ["ecommerce"] },
                "integrations": { "ai": { "enabled": true, "useCases": ["chat"] } },
                "deployment": { "target": "vercel", "ciCd": "github-actions" }
            }"#,
        )
        .unwrap();
        assert!(cfg.sells_online());
        assert!(cfg.integrations.ai.enabled);
        assert_eq!(cfg.deployment.target, Some(DeploymentTarget::Vercel));
        assert_eq!(cfg.deployment.ci_cd, "github-actions");
    }

    #[test]
    fn normalized_drops_blank_entries_only() {
        let mut cfg = Configuration::default();
        cfg.features.items = vec![" search ".into(), "".into(), "  ".into(), "chat".into()];
        cfg.auth.methods = vec!["email-password".into()];
        let cfg = cfg.normalized();
        assert_eq!(cfg.features.items, vec!["search", "chat"]);
        assert_eq!(cfg.auth.methods, vec!["email-password"]);
    }

    #[test]
    fn empty_configuration_has_no_configured_sections() {
        assert!(Configuration::default().configured_sections().is_empty());
        assert_eq!(Configuration::default().feature_count(), 0);
    }

    #[test]
    fn configured_sections_follow_section_order() {
        let mut cfg = Configuration::default();
        cfg.deployment.target = Some(DeploymentTarget::Netlify);
        cfg.auth.enabled = true;
        cfg.project.name = "Acme".into();
        assert_eq!(cfg.configured_sections(), vec!["project", "auth", "deployment"]);
    }

    #[test]
    fn commerce_flag_alone_means_selling_online() {
        let mut cfg = Configuration::default();
        assert!(!cfg.sells_online());
        cfg.commerce.enabled = true;
        assert!(cfg.sells_online());
    }
}
