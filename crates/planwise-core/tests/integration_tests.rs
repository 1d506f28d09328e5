//! Integration tests for planwise-core's public API.

use std::path::Path;
use std::sync::Arc;

use planwise_core::{
    application::ApplicationError,
    domain::{
        ApiStyle, Database, DeploymentTarget, EmptyCatalog, Framework, RecommendField, WebsiteType,
    },
    prelude::*,
};

/// Serves one fixed configuration for any path.
struct FixedReader(Configuration);

impl ConfigurationReader for FixedReader {
    fn read(&self, _path: &Path) -> PlanwiseResult<Configuration> {
        Ok(self.0.clone())
    }
}

struct MissingReader;

impl ConfigurationReader for MissingReader {
    fn read(&self, path: &Path) -> PlanwiseResult<Configuration> {
        Err(ApplicationError::ConfigurationUnreadable {
            path: path.to_path_buf(),
            reason: "No such file or directory".into(),
        }
        .into())
    }
}

fn storefront() -> Configuration {
    let mut c = Configuration::default();
    c.project.name = "Corner Bakery".into();
    c.project.website_types = vec![WebsiteType::Ecommerce];
    c.stack.framework = Some(Framework::NextJs);
    c.stack.database = Some(Database::Postgres);
    c.stack.api_style = Some(ApiStyle::ServerActions);
    c.auth.enabled = true;
    c.auth.methods = vec!["email-password".into()];
    c.commerce.payment_providers = vec!["stripe".into()];
    c.deployment.target = Some(DeploymentTarget::Vercel);
    c
}

fn service(reader: impl ConfigurationReader + 'static) -> PlanningService {
    PlanningService::new(Arc::new(EmptyCatalog), Box::new(reader))
}

#[test]
fn full_planning_workflow() {
    let service = service(FixedReader(storefront()));
    let bundle = service
        .plan_file(Path::new("corner-bakery.json"), &DocumentKind::ALL)
        .unwrap();

    assert_eq!(bundle.profile.display_name, "Next.js on Vercel");
    assert!(bundle.report.scope_estimate.domain_flags.commerce);
    assert!(!bundle.report.has_blocking_errors());

    for doc in &bundle.documents {
        assert!(doc.section("commerce").is_some(), "{}", doc.kind);
        assert!(doc.to_markdown().contains("Corner Bakery"));
    }
}

#[test]
fn recommendations_never_repeat_chosen_values() {
    let service = service(MissingReader);
    let set = service.recommend(RecommendField::PaymentProviders, &storefront());
    assert!(!set.values.iter().any(|v| v == "stripe"));
    assert!(set.values.len() <= RecommendField::PaymentProviders.cap());
}

#[test]
fn unreadable_configuration_surfaces_suggestions() {
    let err = service(MissingReader)
        .plan_file(Path::new("missing.json"), &DocumentKind::ALL)
        .unwrap_err();

    assert_eq!(err.category(), planwise_core::error::ErrorCategory::Configuration);
    assert!(err.suggestions().iter().any(|s| s.contains("missing.json")));
}

#[test]
fn bundle_serializes_with_camel_case_keys() {
    let bundle = service(MissingReader).plan(&storefront(), &[DocumentKind::InitPrompt]);
    let json = serde_json::to_value(&bundle).unwrap();

    assert!(json["report"]["complexityScore"].is_u64());
    assert!(json["report"]["scopeEstimate"]["domainFlags"]["commerce"].as_bool().unwrap());
    assert_eq!(json["documents"][0]["kind"], "init-prompt");
}
