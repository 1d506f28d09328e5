//! Recommendation ranker.
//!
//! Each recommendable field owns a [`FieldRecommender`]: an ordered list of
//! heuristics that read already-chosen fields and append candidates. Ranking
//! is the same for every field:
//!
//! 1. run the heuristics in registration order
//! 2. drop duplicates, keeping the first occurrence
//! 3. for list fields, drop values the user already picked
//! 4. truncate to the field's cap
//!
//! Heuristics push values that are already valid for the field; the ranker
//! does not validate them.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::configuration::Configuration;
use crate::domain::error::DomainError;
use crate::domain::value_objects::{
    ApiStyle, CatalogGroup, Database, DeploymentTarget, Framework, Runtime, WebsiteType,
};

/// Appends zero or more candidates when its condition holds.
pub type Heuristic<T> = fn(&Configuration, &mut Vec<T>);

pub struct FieldRecommender<T: 'static> {
    pub field: RecommendField,
    pub cap: usize,
    pub heuristics: &'static [Heuristic<T>],
    /// Values already selected for list fields.
    pub chosen: Option<fn(&Configuration) -> Vec<T>>,
}

impl<T: PartialEq + Clone> FieldRecommender<T> {
    pub fn rank(&self, config: &Configuration) -> Vec<T> {
        let config = &config.clone().normalized();
        let mut candidates = Vec::new();
        for heuristic in self.heuristics {
            heuristic(config, &mut candidates);
        }

        let mut ranked: Vec<T> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !ranked.contains(&candidate) {
                ranked.push(candidate);
            }
        }

        if let Some(chosen) = self.chosen {
            let chosen = chosen(config);
            ranked.retain(|value| !chosen.contains(value));
        }

        ranked.truncate(self.cap);
        ranked
    }
}

fn push(out: &mut Vec<String>, ids: &[&str]) {
    out.extend(ids.iter().map(|id| (*id).to_string()));
}

fn has_type(config: &Configuration, kinds: &[WebsiteType]) -> bool {
    config
        .project
        .website_types
        .iter()
        .any(|t| kinds.contains(t))
}

// ── Framework ────────────────────────────────────────────────────────────────

pub static FRAMEWORK: FieldRecommender<Framework> = FieldRecommender {
    field: RecommendField::Framework,
    cap: 3,
    heuristics: &[
        |c, out| match c.stack.language.to_ascii_lowercase().as_str() {
            "python" => out.extend([Framework::Django, Framework::FastApi]),
            "php" => out.push(Framework::Laravel),
            "ruby" => out.push(Framework::Rails),
            _ => {}
        },
        |c, out| match c.deployment.target {
            Some(DeploymentTarget::Vercel) => out.push(Framework::NextJs),
            Some(DeploymentTarget::Cloudflare) => {
                out.extend([Framework::SvelteKit, Framework::Astro, Framework::Remix])
            }
            Some(DeploymentTarget::GithubPages) => out.push(Framework::Astro),
            _ => {}
        },
        |c, out| {
            if c.sells_online() {
                out.extend([Framework::NextJs, Framework::Nuxt]);
            }
        },
        |c, out| {
            if has_type(c, &[WebsiteType::Saas, WebsiteType::Dashboard]) {
                out.extend([Framework::NextJs, Framework::SvelteKit]);
            }
        },
        |c, out| {
            let content_only = !c.project.website_types.is_empty()
                && c.project.website_types.iter().all(WebsiteType::is_content_shaped);
            if content_only {
                out.extend([Framework::Astro, Framework::NextJs]);
            }
        },
        |c, out| {
            if c.integrations.ai.enabled {
                out.push(Framework::NextJs);
            }
        },
        |c, out| {
            if !c.business.modules.is_empty() || c.business.multi_tenant {
                out.extend([Framework::NextJs, Framework::Django]);
            }
        },
    ],
    chosen: None,
};

// ── Database ─────────────────────────────────────────────────────────────────

pub static DATABASE: FieldRecommender<Database> = FieldRecommender {
    field: RecommendField::Database,
    cap: 3,
    heuristics: &[
        |c, out| match c.auth.provider.as_str() {
            "supabase" => out.push(Database::Supabase),
            "firebase" => out.push(Database::Firebase),
            _ => {}
        },
        |c, out| {
            if matches!(c.stack.orm.as_str(), "prisma" | "drizzle") {
                out.push(Database::Postgres);
            }
        },
        |c, out| {
            if c.sells_online() || c.business.multi_tenant || !c.business.modules.is_empty() {
                out.push(Database::Postgres);
            }
        },
        |c, out| {
            if c.features.realtime {
                out.extend([Database::Supabase, Database::Firebase]);
            }
        },
        |c, out| {
            if c.integrations.ai.enabled {
                // pgvector
                out.push(Database::Postgres);
            }
        },
        |c, out| {
            if c.deployment.target.as_ref().is_some_and(DeploymentTarget::is_serverless) {
                out.extend([Database::Supabase, Database::PlanetScale]);
            }
        },
        |c, out| {
            if c.auth.enabled {
                out.push(Database::Postgres);
            }
        },
        |c, out| {
            let small_content_site = c.has_content_publishing()
                && !c.sells_online()
                && !c.auth.enabled
                && c.deployment.target.as_ref().is_none_or(|t| !t.is_serverless());
            if small_content_site {
                out.push(Database::Sqlite);
            }
        },
    ],
    chosen: None,
};

// ── API style ────────────────────────────────────────────────────────────────

pub static API_STYLE: FieldRecommender<ApiStyle> = FieldRecommender {
    field: RecommendField::ApiStyle,
    cap: 3,
    heuristics: &[
        |c, out| {
            if c.stack.framework == Some(Framework::NextJs) {
                out.extend([ApiStyle::ServerActions, ApiStyle::Trpc]);
            }
        },
        |c, out| {
            if let Some(fw) = &c.stack.framework {
                match fw.runtime() {
                    Runtime::JavaScript if fw.is_client_only() => {
                        out.extend([ApiStyle::Rest, ApiStyle::Graphql])
                    }
                    Runtime::JavaScript => out.extend([ApiStyle::Rest, ApiStyle::Trpc]),
                    Runtime::Python | Runtime::Php | Runtime::Ruby => out.push(ApiStyle::Rest),
                    Runtime::Unknown => {}
                }
            }
        },
        |c, out| {
            if !c.integrations.external_apis.is_empty() || c.integrations.webhooks {
                out.push(ApiStyle::Rest);
            }
        },
        |c, out| {
            if c.business.modules.len() >= 3 || c.business.multi_tenant {
                out.push(ApiStyle::Graphql);
            }
        },
    ],
    chosen: None,
};

// ── Deployment target ────────────────────────────────────────────────────────

pub static DEPLOYMENT_TARGET: FieldRecommender<DeploymentTarget> = FieldRecommender {
    field: RecommendField::DeploymentTarget,
    cap: 3,
    heuristics: &[
        |c, out| {
            if c.deployment.containerized {
                out.push(DeploymentTarget::Docker);
            }
        },
        |c, out| match &c.stack.framework {
            Some(Framework::NextJs) => out.extend([DeploymentTarget::Vercel, DeploymentTarget::Netlify]),
            Some(Framework::Astro | Framework::SvelteKit | Framework::Remix | Framework::Nuxt) => {
                out.extend([
                    DeploymentTarget::Netlify,
                    DeploymentTarget::Cloudflare,
                    DeploymentTarget::Vercel,
                ])
            }
            Some(Framework::React | Framework::Vue | Framework::Angular) => {
                out.extend([DeploymentTarget::Netlify, DeploymentTarget::Cloudflare])
            }
            Some(
                Framework::Django
                | Framework::FastApi
                | Framework::Laravel
                | Framework::Rails
                | Framework::Express,
            ) => out.extend([
                DeploymentTarget::Railway,
                DeploymentTarget::Fly,
                DeploymentTarget::Docker,
            ]),
            Some(Framework::WordPress) => out.push(DeploymentTarget::Docker),
            Some(Framework::Other(_)) | None => {}
        },
        |c, out| {
            if !c.integrations.queue.is_empty() || c.features.realtime {
                out.extend([DeploymentTarget::Railway, DeploymentTarget::Fly]);
            }
        },
        |c, out| {
            if c.stack.database == Some(Database::Sqlite) {
                out.push(DeploymentTarget::Fly);
            }
        },
        |c, out| {
            let static_site = !c.project.website_types.is_empty()
                && c.project.website_types.iter().all(WebsiteType::is_content_shaped)
                && !c.has_database()
                && !c.auth.enabled;
            if static_site {
                out.extend([DeploymentTarget::Netlify, DeploymentTarget::GithubPages]);
            }
        },
    ],
    chosen: None,
};

// ── Styling ──────────────────────────────────────────────────────────────────

pub static STYLING: FieldRecommender<String> = FieldRecommender {
    field: RecommendField::Styling,
    cap: 3,
    heuristics: &[
        |c, out| {
            if c.stack.ui_library == "shadcn" {
                push(out, &["tailwind"]);
            }
        },
        |c, out| match &c.stack.framework {
            Some(Framework::Angular) => push(out, &["sass", "tailwind"]),
            Some(Framework::React) => push(out, &["tailwind", "css-modules", "styled-components"]),
            Some(Framework::Django | Framework::Laravel | Framework::Rails) => {
                push(out, &["tailwind", "bootstrap"])
            }
            Some(Framework::Other(_)) | None => {}
            Some(_) => push(out, &["tailwind", "css-modules"]),
        },
        |c, out| {
            if c.design.style == "minimal" {
                push(out, &["css-modules", "vanilla-css"]);
            }
        },
    ],
    chosen: None,
};

// ── Authentication methods ───────────────────────────────────────────────────

pub static AUTH_METHODS: FieldRecommender<String> = FieldRecommender {
    field: RecommendField::AuthMethods,
    cap: 4,
    heuristics: &[
        |c, out| {
            if c.auth.enabled {
                push(out, &["email-password"]);
            }
        },
        |c, out| {
            if c.auth.enabled && (c.business.multi_tenant || !c.business.modules.is_empty()) {
                push(out, &["sso"]);
            }
        },
        |c, out| {
            if c.auth.enabled && c.sells_online() {
                push(out, &["google", "apple"]);
            }
        },
        |c, out| {
            if c.auth.enabled && has_type(c, &[WebsiteType::Saas]) {
                push(out, &["google", "magic-link"]);
            }
        },
        |c, out| {
            if c.auth.enabled && has_type(c, &[WebsiteType::Community]) {
                push(out, &["google", "github"]);
            }
        },
        |c, out| {
            if c.auth.enabled && c.auth.mfa {
                push(out, &["passkey"]);
            }
        },
    ],
    chosen: Some(|c| c.auth.methods.clone()),
};

// ── Payment providers ────────────────────────────────────────────────────────

pub static PAYMENT_PROVIDERS: FieldRecommender<String> = FieldRecommender {
    field: RecommendField::PaymentProviders,
    cap: 3,
    heuristics: &[
        |c, out| {
            if c.has_website_type(&WebsiteType::Marketplace) {
                push(out, &["stripe-connect"]);
            }
        },
        |c, out| {
            if c.sells_online() {
                push(out, &["stripe"]);
            }
        },
        |c, out| {
            if c.commerce.subscriptions {
                push(out, &["stripe", "paddle"]);
            }
        },
        |c, out| {
            let european = c.commerce.currencies.iter().any(|cur| cur == "EUR")
                || c.project.languages.iter().any(|l| matches!(l.as_str(), "de" | "nl" | "fr"));
            if c.sells_online() && european {
                push(out, &["mollie"]);
            }
        },
        |c, out| {
            if c.sells_online() {
                push(out, &["paypal"]);
            }
        },
    ],
    chosen: Some(|c| c.commerce.payment_providers.clone()),
};

// ── Features ─────────────────────────────────────────────────────────────────

pub static FEATURES: FieldRecommender<String> = FieldRecommender {
    field: RecommendField::Features,
    cap: 4,
    heuristics: &[
        |c, out| {
            if c.sells_online() {
                push(out, &["search", "reviews", "wishlist"]);
            }
        },
        |c, out| {
            if c.content.blog || has_type(c, &[WebsiteType::Blog, WebsiteType::Documentation]) {
                push(out, &["search", "comments", "newsletter"]);
            }
        },
        |c, out| {
            if has_type(c, &[WebsiteType::Saas, WebsiteType::Dashboard]) {
                push(out, &["analytics-dashboard", "notifications", "team-management"]);
            }
        },
        |c, out| {
            if has_type(c, &[WebsiteType::Community]) {
                push(out, &["user-profiles", "messaging"]);
            }
        },
        |c, out| {
            if has_type(c, &[WebsiteType::Booking]) {
                push(out, &["calendar", "notifications"]);
            }
        },
        |c, out| {
            if c.is_multilingual() {
                push(out, &["language-switcher"]);
            }
        },
        |c, out| {
            if c.integrations.ai.enabled {
                push(out, &["ai-assistant"]);
            }
        },
    ],
    chosen: Some(|c| c.features.items.clone()),
};

// ── Business modules ─────────────────────────────────────────────────────────

pub static BUSINESS_MODULES: FieldRecommender<String> = FieldRecommender {
    field: RecommendField::BusinessModules,
    cap: 4,
    heuristics: &[
        |c, out| {
            if c.sells_online() {
                push(out, &["orders", "inventory", "invoicing"]);
            }
        },
        |c, out| {
            if has_type(c, &[WebsiteType::Booking]) {
                push(out, &["scheduling", "crm"]);
            }
        },
        |c, out| {
            if has_type(c, &[WebsiteType::Corporate, WebsiteType::Saas]) {
                push(out, &["crm", "invoicing"]);
            }
        },
        |c, out| {
            if c.business.multi_tenant {
                push(out, &["tenant-admin", "billing"]);
            }
        },
        |c, out| {
            if !c.workflow.automations.is_empty() || c.workflow.approval_flows {
                push(out, &["reporting"]);
            }
        },
    ],
    chosen: Some(|c| c.business.modules.clone()),
};

// ── AI providers ─────────────────────────────────────────────────────────────

pub static AI_PROVIDERS: FieldRecommender<String> = FieldRecommender {
    field: RecommendField::AiProviders,
    cap: 3,
    heuristics: &[
        |c, out| {
            if c.integrations.ai.enabled {
                push(out, &["openai", "anthropic"]);
            }
        },
        |c, out| {
            let retrieval = !c.integrations.ai.vector_store.is_empty()
                || c.integrations.ai.use_cases.iter().any(|u| u == "embeddings" || u == "search");
            if c.integrations.ai.enabled && retrieval {
                push(out, &["openai", "cohere"]);
            }
        },
        |c, out| {
            if c.integrations.ai.enabled && c.security.gdpr {
                push(out, &["mistral"]);
            }
        },
        |c, out| {
            if c.integrations.ai.enabled && c.deployment.target == Some(DeploymentTarget::Cloudflare) {
                push(out, &["workers-ai"]);
            }
        },
        |c, out| {
            if c.integrations.ai.enabled {
                push(out, &["google"]);
            }
        },
    ],
    chosen: Some(|c| c.integrations.ai.providers.clone()),
};

// ── Named entry points ───────────────────────────────────────────────────────

pub fn recommend_framework(config: &Configuration) -> Vec<Framework> {
    FRAMEWORK.rank(config)
}

pub fn recommend_database(config: &Configuration) -> Vec<Database> {
    DATABASE.rank(config)
}

pub fn recommend_api_style(config: &Configuration) -> Vec<ApiStyle> {
    API_STYLE.rank(config)
}

pub fn recommend_deployment_target(config: &Configuration) -> Vec<DeploymentTarget> {
    DEPLOYMENT_TARGET.rank(config)
}

pub fn recommend_styling(config: &Configuration) -> Vec<String> {
    STYLING.rank(config)
}

pub fn recommend_auth_methods(config: &Configuration) -> Vec<String> {
    AUTH_METHODS.rank(config)
}

pub fn recommend_payment_providers(config: &Configuration) -> Vec<String> {
    PAYMENT_PROVIDERS.rank(config)
}

pub fn recommend_features(config: &Configuration) -> Vec<String> {
    FEATURES.rank(config)
}

pub fn recommend_business_modules(config: &Configuration) -> Vec<String> {
    BUSINESS_MODULES.rank(config)
}

pub fn recommend_ai_providers(config: &Configuration) -> Vec<String> {
    AI_PROVIDERS.rank(config)
}

// ── Keyed form ───────────────────────────────────────────────────────────────

/// Every field that has a recommender, keyed by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendField {
    Framework,
    Database,
    ApiStyle,
    DeploymentTarget,
    Styling,
    AuthMethods,
    PaymentProviders,
    Features,
    BusinessModules,
    AiProviders,
}

impl RecommendField {
    pub const ALL: [RecommendField; 10] = [
        Self::Framework,
        Self::Database,
        Self::ApiStyle,
        Self::DeploymentTarget,
        Self::Styling,
        Self::AuthMethods,
        Self::PaymentProviders,
        Self::Features,
        Self::BusinessModules,
        Self::AiProviders,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Framework => "framework",
            Self::Database => "database",
            Self::ApiStyle => "apiStyle",
            Self::DeploymentTarget => "deploymentTarget",
            Self::Styling => "styling",
            Self::AuthMethods => "authMethods",
            Self::PaymentProviders => "paymentProviders",
            Self::Features => "features",
            Self::BusinessModules => "businessModules",
            Self::AiProviders => "aiProviders",
        }
    }

    /// Maximum number of candidates returned for this field.
    pub fn cap(&self) -> usize {
        match self {
            Self::Framework => FRAMEWORK.cap,
            Self::Database => DATABASE.cap,
            Self::ApiStyle => API_STYLE.cap,
            Self::DeploymentTarget => DEPLOYMENT_TARGET.cap,
            Self::Styling => STYLING.cap,
            Self::AuthMethods => AUTH_METHODS.cap,
            Self::PaymentProviders => PAYMENT_PROVIDERS.cap,
            Self::Features => FEATURES.cap,
            Self::BusinessModules => BUSINESS_MODULES.cap,
            Self::AiProviders => AI_PROVIDERS.cap,
        }
    }

    /// Catalog group used to label this field's values.
    pub const fn catalog_group(&self) -> CatalogGroup {
        match self {
            Self::Framework => CatalogGroup::Framework,
            Self::Database => CatalogGroup::Database,
            Self::ApiStyle => CatalogGroup::ApiStyle,
            Self::DeploymentTarget => CatalogGroup::DeploymentTarget,
            Self::Styling => CatalogGroup::Styling,
            Self::AuthMethods => CatalogGroup::AuthMethod,
            Self::PaymentProviders => CatalogGroup::PaymentProvider,
            Self::Features => CatalogGroup::Feature,
            Self::BusinessModules => CatalogGroup::BusinessModule,
            Self::AiProviders => CatalogGroup::AiProvider,
        }
    }
}

impl fmt::Display for RecommendField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecommendField {
    type Err = DomainError;

    /// Accepts the camelCase wire key as well as snake and kebab spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().to_ascii_lowercase() == wanted)
            .ok_or_else(|| DomainError::UnknownField {
                field: s.to_string(),
            })
    }
}

/// Ranked candidates for one field, as wire strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationSet {
    pub field: RecommendField,
    pub values: Vec<String>,
}

fn to_wire<T: Into<String>>(values: Vec<T>) -> Vec<String> {
    values.into_iter().map(Into::into).collect()
}

/// Recommend values for any field by key.
pub fn recommend(field: RecommendField, config: &Configuration) -> RecommendationSet {
    let values = match field {
        RecommendField::Framework => to_wire(recommend_framework(config)),
        RecommendField::Database => to_wire(recommend_database(config)),
        RecommendField::ApiStyle => to_wire(recommend_api_style(config)),
        RecommendField::DeploymentTarget => to_wire(recommend_deployment_target(config)),
        RecommendField::Styling => recommend_styling(config),
        RecommendField::AuthMethods => recommend_auth_methods(config),
        RecommendField::PaymentProviders => recommend_payment_providers(config),
        RecommendField::Features => recommend_features(config),
        RecommendField::BusinessModules => recommend_business_modules(config),
        RecommendField::AiProviders => recommend_ai_providers(config),
    };
    RecommendationSet { field, values }
}

/// Recommendations for every field, in [`RecommendField::ALL`] order.
pub fn recommend_all(config: &Configuration) -> Vec<RecommendationSet> {
    RecommendField::ALL
        .into_iter()
        .map(|field| recommend(field, config))
        .collect()
}
