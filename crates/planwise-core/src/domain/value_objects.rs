//! Domain value objects: website types, frameworks, databases, API styles,
//! deployment targets, finding severities and catalog groups.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. They
//! hold NO rule logic. Analysis lives in `analysis`, recommendations in
//! `recommend`, stack knowledge in `profiles`. This file's only job is to
//! define the types, their wire strings, and their parsers.
//!
//! # Unknown values
//!
//! The wizard owns the option lists and may grow them before the engine
//! learns about a new value. Every open domain therefore carries an
//! `Other(raw)` variant: parsing never fails, and the raw string survives a
//! round-trip so it can still be rendered verbatim.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `parse` arm here
//! 3. Add a label to the built-in catalog in `planwise-adapters`
//! 4. Done. Rules that do not mention the variant keep working.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

// ── WebsiteType ───────────────────────────────────────────────────────────────

/// What kind of site or application the user is building.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WebsiteType {
    Landing,
    Portfolio,
    Blog,
    Ecommerce,
    Marketplace,
    Saas,
    Corporate,
    Booking,
    Community,
    Documentation,
    Dashboard,
    Other(String),
}

impl WebsiteType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Landing => "landing",
            Self::Portfolio => "portfolio",
            Self::Blog => "blog",
            Self::Ecommerce => "ecommerce",
            Self::Marketplace => "marketplace",
            Self::Saas => "saas",
            Self::Corporate => "corporate",
            Self::Booking => "booking",
            Self::Community => "community",
            Self::Documentation => "documentation",
            Self::Dashboard => "dashboard",
            Self::Other(raw) => raw,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "landing" | "landing-page" => Self::Landing,
            "portfolio" => Self::Portfolio,
            "blog" => Self::Blog,
            "ecommerce" | "e-commerce" | "shop" | "online-shop" => Self::Ecommerce,
            "marketplace" => Self::Marketplace,
            "saas" => Self::Saas,
            "corporate" | "business" => Self::Corporate,
            "booking" => Self::Booking,
            "community" | "forum" => Self::Community,
            "documentation" | "docs" => Self::Documentation,
            "dashboard" | "admin" => Self::Dashboard,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    /// Whether this type implies selling goods or services online.
    pub fn is_commerce_shaped(&self) -> bool {
        matches!(self, Self::Ecommerce | Self::Marketplace)
    }

    /// Whether this type is primarily about publishing content.
    pub fn is_content_shaped(&self) -> bool {
        matches!(
            self,
            Self::Blog | Self::Documentation | Self::Portfolio | Self::Landing
        )
    }
}

// ── Framework ─────────────────────────────────────────────────────────────────

/// The application framework the project will be built on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Framework {
    NextJs,
    Astro,
    Nuxt,
    SvelteKit,
    Remix,
    React,
    Vue,
    Angular,
    Django,
    FastApi,
    Laravel,
    Rails,
    Express,
    WordPress,
    Other(String),
}

/// The language runtime a framework executes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    JavaScript,
    Python,
    Php,
    Ruby,
    Unknown,
}

impl Framework {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NextJs => "nextjs",
            Self::Astro => "astro",
            Self::Nuxt => "nuxt",
            Self::SvelteKit => "sveltekit",
            Self::Remix => "remix",
            Self::React => "react",
            Self::Vue => "vue",
            Self::Angular => "angular",
            Self::Django => "django",
            Self::FastApi => "fastapi",
            Self::Laravel => "laravel",
            Self::Rails => "rails",
            Self::Express => "express",
            Self::WordPress => "wordpress",
            Self::Other(raw) => raw,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "nextjs" | "next" | "next.js" => Self::NextJs,
            "astro" => Self::Astro,
            "nuxt" | "nuxtjs" => Self::Nuxt,
            "sveltekit" | "svelte-kit" | "svelte" => Self::SvelteKit,
            "remix" => Self::Remix,
            "react" | "react-vite" => Self::React,
            "vue" | "vuejs" => Self::Vue,
            "angular" => Self::Angular,
            "django" => Self::Django,
            "fastapi" => Self::FastApi,
            "laravel" => Self::Laravel,
            "rails" | "ruby-on-rails" => Self::Rails,
            "express" | "expressjs" => Self::Express,
            "wordpress" | "wp" => Self::WordPress,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    /// The runtime this framework executes on.
    pub fn runtime(&self) -> Runtime {
        match self {
            Self::NextJs
            | Self::Astro
            | Self::Nuxt
            | Self::SvelteKit
            | Self::Remix
            | Self::React
            | Self::Vue
            | Self::Angular
            | Self::Express => Runtime::JavaScript,
            Self::Django | Self::FastApi => Runtime::Python,
            Self::Laravel | Self::WordPress => Runtime::Php,
            Self::Rails => Runtime::Ruby,
            Self::Other(_) => Runtime::Unknown,
        }
    }

    /// Client-only frameworks render in the browser and ship no server.
    pub fn is_client_only(&self) -> bool {
        matches!(self, Self::React | Self::Vue | Self::Angular)
    }
}

// ── Database ──────────────────────────────────────────────────────────────────

/// Primary data store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Database {
    Postgres,
    Mysql,
    Sqlite,
    Mongodb,
    Supabase,
    Firebase,
    PlanetScale,
    Other(String),
}

impl Database {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Postgres => "postgresql",
            Self::Mysql => "mysql",
            Self::Sqlite => "sqlite",
            Self::Mongodb => "mongodb",
            Self::Supabase => "supabase",
            Self::Firebase => "firebase",
            Self::PlanetScale => "planetscale",
            Self::Other(raw) => raw,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" | "pg" => Self::Postgres,
            "mysql" | "mariadb" => Self::Mysql,
            "sqlite" => Self::Sqlite,
            "mongodb" | "mongo" => Self::Mongodb,
            "supabase" => Self::Supabase,
            "firebase" | "firestore" => Self::Firebase,
            "planetscale" => Self::PlanetScale,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    /// Whether the store speaks SQL.
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            Self::Postgres | Self::Mysql | Self::Sqlite | Self::Supabase | Self::PlanetScale
        )
    }
}

// ── ApiStyle ──────────────────────────────────────────────────────────────────

/// How the frontend talks to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApiStyle {
    Rest,
    Graphql,
    Trpc,
    ServerActions,
    Grpc,
    Other(String),
}

impl ApiStyle {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rest => "rest",
            Self::Graphql => "graphql",
            Self::Trpc => "trpc",
            Self::ServerActions => "server-actions",
            Self::Grpc => "grpc",
            Self::Other(raw) => raw,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "rest" | "restful" => Self::Rest,
            "graphql" | "gql" => Self::Graphql,
            "trpc" => Self::Trpc,
            "server-actions" | "serveractions" => Self::ServerActions,
            "grpc" => Self::Grpc,
            _ => Self::Other(s.trim().to_string()),
        }
    }
}

// ── DeploymentTarget ──────────────────────────────────────────────────────────

/// Where the project will be hosted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeploymentTarget {
    Vercel,
    Netlify,
    Cloudflare,
    Aws,
    Docker,
    Railway,
    Fly,
    GithubPages,
    Other(String),
}

impl DeploymentTarget {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Vercel => "vercel",
            Self::Netlify => "netlify",
            Self::Cloudflare => "cloudflare",
            Self::Aws => "aws",
            Self::Docker => "docker",
            Self::Railway => "railway",
            Self::Fly => "fly",
            Self::GithubPages => "github-pages",
            Self::Other(raw) => raw,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "vercel" => Self::Vercel,
            "netlify" => Self::Netlify,
            "cloudflare" | "cloudflare-pages" | "cloudflare-workers" => Self::Cloudflare,
            "aws" | "amazon" => Self::Aws,
            "docker" | "self-hosted" | "vps" => Self::Docker,
            "railway" => Self::Railway,
            "fly" | "fly.io" | "flyio" => Self::Fly,
            "github-pages" | "gh-pages" => Self::GithubPages,
            _ => Self::Other(s.trim().to_string()),
        }
    }

    /// Platforms whose compute is short-lived functions with an ephemeral disk.
    pub fn is_serverless(&self) -> bool {
        matches!(self, Self::Vercel | Self::Netlify | Self::Cloudflare)
    }

    /// Platforms that can only serve pre-built files.
    pub fn is_static_only(&self) -> bool {
        matches!(self, Self::GithubPages)
    }
}

// ── Shared string conversions ────────────────────────────────────────────────

macro_rules! string_value {
    ($ty:ident) => {
        impl From<String> for $ty {
            fn from(s: String) -> Self {
                Self::parse(&s)
            }
        }

        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                Self::parse(s)
            }
        }

        impl From<$ty> for String {
            fn from(v: $ty) -> Self {
                v.as_str().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_value!(WebsiteType);
string_value!(Framework);
string_value!(Database);
string_value!(ApiStyle);
string_value!(DeploymentTarget);

// ── Severity ──────────────────────────────────────────────────────────────────

/// How serious a warning is.
///
/// `Error` means the configuration is functionally broken. It is advisory:
/// the engine never refuses to analyze or synthesize because of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CatalogGroup ──────────────────────────────────────────────────────────────

/// A named group of selectable options in the reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogGroup {
    WebsiteType,
    Framework,
    Database,
    ApiStyle,
    DeploymentTarget,
    Styling,
    AuthMethod,
    PaymentProvider,
    Feature,
    BusinessModule,
    AiProvider,
    Cms,
    Locale,
    Testing,
    CiCd,
}

impl CatalogGroup {
    pub const ALL: [CatalogGroup; 15] = [
        Self::WebsiteType,
        Self::Framework,
        Self::Database,
        Self::ApiStyle,
        Self::DeploymentTarget,
        Self::Styling,
        Self::AuthMethod,
        Self::PaymentProvider,
        Self::Feature,
        Self::BusinessModule,
        Self::AiProvider,
        Self::Cms,
        Self::Locale,
        Self::Testing,
        Self::CiCd,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WebsiteType => "website-type",
            Self::Framework => "framework",
            Self::Database => "database",
            Self::ApiStyle => "api-style",
            Self::DeploymentTarget => "deployment-target",
            Self::Styling => "styling",
            Self::AuthMethod => "auth-method",
            Self::PaymentProvider => "payment-provider",
            Self::Feature => "feature",
            Self::BusinessModule => "business-module",
            Self::AiProvider => "ai-provider",
            Self::Cms => "cms",
            Self::Locale => "locale",
            Self::Testing => "testing",
            Self::CiCd => "ci-cd",
        }
    }
}

impl fmt::Display for CatalogGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogGroup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownCatalogGroup {
                group: s.to_string(),
            })
    }
}
