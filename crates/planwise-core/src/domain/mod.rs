//! Core domain layer for Planwise.
//!
//! Pure planning logic over an immutable [`Configuration`] snapshot. All
//! catalog lookups go through the [`OptionCatalog`] port; reading files and
//! writing documents is the application layer's job.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: every entry point is synchronous
//! - **No I/O**: no filesystem, network or logging calls
//! - **Total**: `analyze`, `recommend*` and synthesis never fail for a
//!   structurally valid configuration
//! - **Read-only registries**: rules, profiles and heuristics are constants

pub mod analysis;
pub mod catalog;
pub mod configuration;
pub mod error;
pub mod profiles;
pub mod recommend;
pub mod render;
pub mod synthesis;
pub mod value_objects;

pub use analysis::{
    AnalysisReport, Analyzer, CompatibilityIssue, ComplexityLabel, DomainFlags, Rule, RuleCatalog,
    ScopeEstimate, Suggestion, Warning, analyze,
};
pub use catalog::{CatalogEntry, EmptyCatalog, Labels, OptionCatalog};
pub use configuration::Configuration;
pub use error::{DomainError, ErrorCategory};
pub use profiles::{DEFAULT_PROFILE, StackProfile, resolve_stack_profile};
pub use recommend::{RecommendField, RecommendationSet, recommend, recommend_all};
pub use render::RenderContext;
pub use synthesis::{DocumentKind, DocumentSynthesizer, GeneratedDocument, Section};
pub use value_objects::{
    ApiStyle, CatalogGroup, Database, DeploymentTarget, Framework, Severity, WebsiteType,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn from_json(json: &str) -> Configuration {
        serde_json::from_str::<Configuration>(json)
            .unwrap()
            .normalized()
    }

    #[test]
    fn nothing_selected_scores_minimum_with_warnings() {
        let config = from_json(r#"{"project": {"websiteTypes": []}, "stack": {"framework": ""}}"#);
        let report = analyze(&config);

        let messages: Vec<String> = report
            .warnings
            .iter()
            .map(|w| w.message.to_lowercase())
            .collect();
        assert!(messages.iter().any(|m| m.contains("no website type selected")));
        assert!(messages.iter().any(|m| m.contains("no framework selected")));
        assert_eq!(report.complexity_score, 1);
    }

    #[test]
    fn ecommerce_without_ssl_is_an_error_on_ssl() {
        let config = from_json(
            r#"{"project": {"websiteTypes": ["ecommerce"]}, "security": {"ssl": false}}"#,
        );
        let report = analyze(&config);

        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.severity == Severity::Error && w.field.ends_with("ssl"))
        );
        assert!(report.has_blocking_errors());
    }

    #[test]
    fn astro_with_graphql_is_incompatible() {
        let config = from_json(r#"{"stack": {"framework": "astro", "apiStyle": "graphql"}}"#);
        let report = analyze(&config);

        assert!(report.compatibility_issues.iter().any(|issue| {
            let message = issue.message.to_lowercase();
            !message.is_empty() && message.contains("astro") && message.contains("graphql")
        }));
    }

    #[test]
    fn framework_recommendations_are_stable() {
        let config = from_json(
            r#"{"project": {"websiteTypes": ["blog", "saas"]}, "auth": {"enabled": true}}"#,
        );
        let first = recommend(RecommendField::Framework, &config);
        let second = recommend(RecommendField::Framework, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn auth_without_methods_warns_on_methods_field() {
        let config = from_json(r#"{"auth": {"enabled": true, "methods": []}}"#);
        let report = analyze(&config);

        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.severity == Severity::Warning && w.field == "auth.methods")
        );
    }

    #[test]
    fn analysis_is_deterministic_and_bounded() {
        let configs = [
            Configuration::default(),
            from_json(
                r#"{
                    "project": {"websiteTypes": ["ecommerce", "marketplace", "saas"], "languages": ["en", "fr", "de"]},
                    "stack": {"framework": "nextjs", "database": "postgresql", "apiStyle": "graphql"},
                    "auth": {"enabled": true, "methods": ["email-password", "oauth"], "mfa": true},
                    "commerce": {"enabled": true, "subscriptions": true},
                    "features": {"items": ["search", "chat", "dashboard", "comments"], "realtime": true},
                    "integrations": {"externalApis": ["maps", "crm"], "ai": {"enabled": true, "useCases": ["chat"]}},
                    "business": {"modules": ["crm", "invoicing", "hr"], "multiTenant": true},
                    "workflow": {"automations": ["a", "b", "c"]},
                    "deployment": {"environments": ["dev", "staging", "prod"]}
                }"#,
            ),
        ];

        for config in &configs {
            let a = analyze(config);
            let b = analyze(config);
            assert_eq!(a, b);
            assert!((analysis::MIN_SCORE..=analysis::MAX_SCORE).contains(&a.complexity_score));
        }
    }

    #[test]
    fn partial_documents_merge_with_defaults() {
        let config = from_json(r#"{"project": {"name": "  Field Notes  "}}"#);
        assert_eq!(config.project.name, "Field Notes");
        assert!(config.security.ssl);
        assert!(config.design.responsive);
        assert!(config.stack.framework.is_none());
    }

    /// Deserialized as a library caller would, without `normalized()`.
    fn raw_json(json: &str) -> Configuration {
        serde_json::from_str::<Configuration>(json).unwrap()
    }

    #[test]
    fn blank_website_type_counts_as_nothing_selected() {
        let config = raw_json(r#"{"project": {"websiteTypes": [""]}}"#);
        assert_eq!(config.project.website_types.len(), 1);

        let report = analyze(&config);
        assert!(report.warning("no-website-type").is_some());
        assert_eq!(report, analyze(&config.clone().normalized()));
    }

    #[test]
    fn blank_auth_methods_count_as_none() {
        let config = raw_json(r#"{"auth": {"enabled": true, "methods": ["", "  "]}}"#);
        let warning = analyze(&config).warning("auth-without-methods").cloned();
        assert_eq!(warning.map(|w| w.field), Some("auth.methods"));
    }

    #[test]
    fn padded_choices_are_recognised_when_ranking() {
        let config = raw_json(
            r#"{"commerce": {"enabled": true, "paymentProviders": ["  stripe "]}}"#,
        );
        let set = recommend(RecommendField::PaymentProviders, &config);
        assert!(!set.values.iter().any(|v| v == "stripe"));
    }

    #[test]
    fn blank_locales_do_not_make_documents_multilingual() {
        let config = raw_json(r#"{"project": {"languages": ["en", ""]}}"#);
        let synth = DocumentSynthesizer::new(&EmptyCatalog);
        for kind in DocumentKind::ALL {
            let doc = synth.synthesize(kind, &config, &DEFAULT_PROFILE);
            assert!(doc.section("i18n").is_none(), "{kind}");
        }
    }
}
