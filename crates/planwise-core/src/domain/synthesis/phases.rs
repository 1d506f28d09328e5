//! Build phase planning.
//!
//! A fixed skeleton of phases with optional phases spliced in for the
//! subsystems the configuration turns on. Numbers are assigned after the
//! phases are chosen, so an omitted phase never leaves a gap.

use serde::Serialize;

use crate::domain::catalog::Labels;
use crate::domain::configuration::Configuration;
use crate::domain::value_objects::{CatalogGroup, Database};

use super::artifacts::Artifacts;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub number: usize,
    pub title: &'static str,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    pub phases: Vec<Phase>,
}

impl BuildPlan {
    pub fn derive(config: &Configuration, artifacts: &Artifacts, labels: &Labels<'_>) -> Self {
        let mut drafts: Vec<(&'static str, Vec<String>)> = Vec::new();

        drafts.push(("Project Setup", setup_items(config, labels)));
        if config.has_database() {
            drafts.push(("Data Layer", data_items(config, artifacts, labels)));
        }
        if config.auth.enabled {
            drafts.push(("Authentication", auth_items(config, labels)));
        }
        drafts.push(("Layout & Navigation", layout_items(config, artifacts)));
        drafts.push(("Core Features", feature_items(config, labels)));
        if config.has_background_work() {
            drafts.push(("Background Processing", background_items(config)));
        }
        if config.integrations.ai.enabled {
            drafts.push(("AI Integration", ai_items(config, labels)));
        }
        if !config.business.modules.is_empty() {
            drafts.push(("Business Modules", module_items(config, labels)));
        }
        drafts.push(("Testing & Quality", testing_items(config, labels)));
        drafts.push(("Deployment", deployment_items(config, labels)));

        let phases = drafts
            .into_iter()
            .enumerate()
            .map(|(i, (title, items))| Phase {
                number: i + 1,
                title,
                items,
            })
            .collect();

        Self { phases }
    }

    pub fn phase(&self, title: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.title == title)
    }

    /// Markdown with `phase.item` numbering.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for phase in &self.phases {
            out.push_str(&format!("### Phase {}: {}\n\n", phase.number, phase.title));
            for (i, item) in phase.items.iter().enumerate() {
                out.push_str(&format!("{}.{} {}\n", phase.number, i + 1, item));
            }
            out.push('\n');
        }
        out.trim_end().to_string()
    }
}

fn setup_items(config: &Configuration, labels: &Labels<'_>) -> Vec<String> {
    let mut items = Vec::new();
    match &config.stack.framework {
        Some(fw) => items.push(format!(
            "Initialise the {} project",
            labels.label_or_raw(CatalogGroup::Framework, fw.as_str())
        )),
        None => items.push("Initialise the project with the chosen framework".into()),
    }
    if !config.stack.package_manager.is_empty() {
        items.push(format!("Use {} for dependency management", config.stack.package_manager));
    }
    if !config.stack.styling.is_empty() {
        items.push(format!(
            "Configure {}",
            labels.label_or_raw(CatalogGroup::Styling, &config.stack.styling)
        ));
    }
    items.push("Set up linting, formatting and environment variable handling".into());
    if config.stack.monorepo {
        items.push("Create the monorepo workspace layout".into());
    }
    items
}

fn data_items(config: &Configuration, artifacts: &Artifacts, labels: &Labels<'_>) -> Vec<String> {
    let mut items = Vec::new();
    let relational = config.stack.database.as_ref().is_some_and(Database::is_relational);
    if let Some(db) = &config.stack.database {
        items.push(format!(
            "Provision the {} database for each environment",
            labels.label_or_raw(CatalogGroup::Database, db.as_str())
        ));
    }
    match (config.stack.orm.is_empty(), relational) {
        (false, true) => items.push(format!("Set up {} and the first migration", config.stack.orm)),
        (false, false) => items.push(format!("Set up {} and define the collections", config.stack.orm)),
        (true, true) => items.push("Write the initial schema migration".into()),
        (true, false) => {}
    }
    if !artifacts.entities.is_empty() {
        items.push(format!(
            "Model entities: {}",
            artifacts.entity_names().join(", ")
        ));
    }
    items.push("Add seed data for local development".into());
    items
}

fn auth_items(config: &Configuration, labels: &Labels<'_>) -> Vec<String> {
    let mut items = Vec::new();
    if !config.auth.provider.is_empty() {
        items.push(format!("Integrate {} as the identity provider", config.auth.provider));
    }
    if !config.auth.methods.is_empty() {
        items.push(format!(
            "Implement sign-in via {}",
            labels.join(CatalogGroup::AuthMethod, &config.auth.methods, "")
        ));
    }
    if config.auth.email_verification {
        items.push("Send verification emails on sign-up".into());
    }
    if config.auth.mfa {
        items.push("Add multi-factor authentication".into());
    }
    if !config.auth.roles.is_empty() {
        items.push(format!(
            "Enforce role-based access for: {}",
            config.auth.roles.join(", ")
        ));
    }
    items.push("Protect private routes and API handlers".into());
    items
}

fn layout_items(config: &Configuration, artifacts: &Artifacts) -> Vec<String> {
    let mut items = vec![format!(
        "Build shared components: {}",
        artifacts.components.join(", ")
    )];
    if config.design.dark_mode {
        items.push("Implement light and dark themes".into());
    }
    if config.is_multilingual() {
        items.push(format!(
            "Set up routing for locales: {}",
            config.project.languages.join(", ")
        ));
    }
    items.push("Add error, loading and not-found states".into());
    items
}

fn feature_items(config: &Configuration, labels: &Labels<'_>) -> Vec<String> {
    let mut items: Vec<String> = config
        .features
        .items
        .iter()
        .map(|f| format!("Implement {}", labels.label_or_raw(CatalogGroup::Feature, f)))
        .collect();
    if !config.features.search.is_empty() {
        items.push(format!("Add search backed by {}", config.features.search));
    }
    if config.features.realtime {
        items.push("Add realtime updates over websockets or server-sent events".into());
    }
    if config.features.pwa {
        items.push("Ship a web app manifest and service worker".into());
    }
    if items.is_empty() {
        items.push("Implement the primary user journey end to end".into());
    }
    items
}

fn background_items(config: &Configuration) -> Vec<String> {
    let mut items = Vec::new();
    if !config.integrations.queue.is_empty() {
        items.push(format!("Set up {} workers", config.integrations.queue));
    }
    if config.workflow.scheduled_jobs {
        items.push("Configure scheduled jobs".into());
    }
    for automation in &config.workflow.automations {
        items.push(format!("Automate: {automation}"));
    }
    items.push("Add retries and dead-letter handling for failed jobs".into());
    items
}

fn ai_items(config: &Configuration, labels: &Labels<'_>) -> Vec<String> {
    let ai = &config.integrations.ai;
    let mut items = Vec::new();
    if !ai.providers.is_empty() {
        items.push(format!(
            "Connect {}",
            labels.join(CatalogGroup::AiProvider, &ai.providers, "")
        ));
    }
    for use_case in &ai.use_cases {
        items.push(format!("Build the {use_case} flow"));
    }
    if !ai.vector_store.is_empty() {
        items.push(format!("Index content into {}", ai.vector_store));
    }
    if ai.streaming {
        items.push("Stream model responses to the client".into());
    }
    items.push("Add usage limits and prompt logging".into());
    items
}

fn module_items(config: &Configuration, labels: &Labels<'_>) -> Vec<String> {
    let mut items: Vec<String> = config
        .business
        .modules
        .iter()
        .map(|m| format!("Build the {} module", labels.label_or_raw(CatalogGroup::BusinessModule, m)))
        .collect();
    if config.workflow.approval_flows {
        items.push("Add approval flows for sensitive actions".into());
    }
    items
}

fn testing_items(config: &Configuration, labels: &Labels<'_>) -> Vec<String> {
    let mut items = Vec::new();
    if config.stack.testing.is_empty() {
        items.push("Add unit tests for business logic".into());
    } else {
        items.push(format!(
            "Write tests with {}",
            labels.join(CatalogGroup::Testing, &config.stack.testing, "")
        ));
    }
    items.push("Cover critical user flows with end-to-end tests".into());
    if !config.design.accessibility_level.is_empty() {
        items.push("Run automated accessibility checks".into());
    }
    items
}

fn deployment_items(config: &Configuration, labels: &Labels<'_>) -> Vec<String> {
    let mut items = Vec::new();
    match &config.deployment.target {
        Some(target) => items.push(format!(
            "Deploy to {}",
            labels.label_or_raw(CatalogGroup::DeploymentTarget, target.as_str())
        )),
        None => items.push("Choose a hosting platform and deploy".into()),
    }
    if !config.deployment.ci_cd.is_empty() {
        items.push(format!(
            "Automate releases with {}",
            labels.label_or_raw(CatalogGroup::CiCd, &config.deployment.ci_cd)
        ));
    }
    if !config.deployment.custom_domain.is_empty() {
        items.push(format!("Point {} at production", config.deployment.custom_domain));
    }
    if !config.deployment.error_tracking.is_empty() {
        items.push(format!("Wire up {} error tracking", config.deployment.error_tracking));
    }
    if !config.deployment.monitoring.is_empty() {
        items.push(format!(
            "Add monitoring: {}",
            config.deployment.monitoring.join(", ")
        ));
    }
    items
}
