//! Document synthesizer.
//!
//! Two long-form Markdown documents are composed from a configuration, its
//! stack profile and a library of conditional fragments:
//!
//! - the **init prompt**, an instruction brief for whoever builds the project
//! - the **development concept**, a planning document for stakeholders
//!
//! Both documents read one shared [`Draft`] (artifacts, build plan, labels)
//! so derived data is computed once. Section order is fixed per document.
//! Synthesis is total: blank optional fields yield placeholders, never a
//! failure.

pub mod artifacts;
mod concept;
mod fragments;
mod init_prompt;
pub mod phases;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::catalog::{Labels, OptionCatalog};
use crate::domain::configuration::Configuration;
use crate::domain::error::DomainError;
use crate::domain::profiles::StackProfile;
use crate::domain::render::RenderContext;

pub use artifacts::{Artifacts, Endpoint, Entity, derive_artifacts};
pub use phases::{BuildPlan, Phase};

// ── Documents ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    InitPrompt,
    DevelopmentConcept,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [Self::InitPrompt, Self::DevelopmentConcept];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InitPrompt => "init-prompt",
            Self::DevelopmentConcept => "concept",
        }
    }

    /// File name used when the document is exported.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::InitPrompt => "INIT_PROMPT.md",
            Self::DevelopmentConcept => "DEVELOPMENT_CONCEPT.md",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "init-prompt" | "init" | "prompt" => Ok(Self::InitPrompt),
            "concept" | "development-concept" | "dev-concept" => Ok(Self::DevelopmentConcept),
            _ => Err(DomainError::UnknownDocumentKind { kind: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub heading: String,
    pub body: String,
}

impl Section {
    pub(crate) fn new(id: &'static str, heading: impl Into<String>, body: String) -> Self {
        Self {
            id,
            heading: heading.into(),
            body,
        }
    }
}

/// One synthesized document. Always regenerated in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedDocument {
    pub kind: DocumentKind,
    pub title: String,
    pub sections: Vec<Section>,
}

impl GeneratedDocument {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_ids(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.id).collect()
    }

    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n", self.title);
        for section in &self.sections {
            out.push_str(&format!("\n## {}\n\n{}\n", section.heading, section.body));
        }
        out
    }
}

impl fmt::Display for GeneratedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markdown())
    }
}

// ── Shared derivation ────────────────────────────────────────────────────────

/// Everything derived once per synthesis call.
pub(crate) struct Draft<'a> {
    pub config: Configuration,
    pub profile: &'a StackProfile,
    pub labels: Labels<'a>,
    pub ctx: RenderContext,
    pub artifacts: Artifacts,
    pub plan: BuildPlan,
}

impl<'a> Draft<'a> {
    fn new(config: &Configuration, profile: &'a StackProfile, catalog: &'a dyn OptionCatalog) -> Self {
        let config = config.clone().normalized();
        let labels = Labels::new(catalog);
        let artifacts = derive_artifacts(&config, profile);
        let plan = BuildPlan::derive(&config, &artifacts, &labels);
        Self {
            ctx: RenderContext::new(config.project.name.as_str()),
            config,
            profile,
            labels,
            artifacts,
            plan,
        }
    }
}

// ── Synthesizer ──────────────────────────────────────────────────────────────

pub struct DocumentSynthesizer<'a> {
    catalog: &'a dyn OptionCatalog,
}

impl<'a> DocumentSynthesizer<'a> {
    pub fn new(catalog: &'a dyn OptionCatalog) -> Self {
        Self { catalog }
    }

    pub fn init_prompt(&self, config: &Configuration, profile: &StackProfile) -> GeneratedDocument {
        init_prompt::compose(&Draft::new(config, profile, self.catalog))
    }

    pub fn development_concept(
        &self,
        config: &Configuration,
        profile: &StackProfile,
    ) -> GeneratedDocument {
        concept::compose(&Draft::new(config, profile, self.catalog))
    }

    pub fn synthesize(
        &self,
        kind: DocumentKind,
        config: &Configuration,
        profile: &StackProfile,
    ) -> GeneratedDocument {
        match kind {
            DocumentKind::InitPrompt => self.init_prompt(config, profile),
            DocumentKind::DevelopmentConcept => self.development_concept(config, profile),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::EmptyCatalog;
    use crate::domain::profiles::{DEFAULT_PROFILE, resolve_stack_profile};
    use crate::domain::value_objects::{Database, DeploymentTarget, Framework, WebsiteType};

    fn synth() -> DocumentSynthesizer<'static> {
        DocumentSynthesizer::new(&EmptyCatalog)
    }

    fn rich() -> Configuration {
        let mut c = Configuration::default();
        c.project.name = "Acme Store".into();
        c.project.website_types = vec![WebsiteType::Saas];
        c.project.languages = vec!["en".into(), "de".into()];
        c.stack.framework = Some(Framework::NextJs);
        c.stack.database = Some(Database::Postgres);
        c.auth.enabled = true;
        c.auth.methods = vec!["email-password".into()];
        c.content.blog = true;
        c.integrations.ai.enabled = true;
        c.integrations.queue = "bullmq".into();
        c.integrations.webhooks = true;
        c.business.modules = vec!["crm".into()];
        c.workflow.automations = vec!["welcome email".into()];
        c.deployment.target = Some(DeploymentTarget::Vercel);
        c
    }

    /// `toggle` must turn on exactly the subsystem behind `section`.
    fn assert_gating(kind: DocumentKind, section: &str, toggle: fn(&mut Configuration)) {
        let base = rich();
        let mut toggled = rich();
        toggle(&mut toggled);
        let profile = resolve_stack_profile(base.deployment.target.as_ref(), base.stack.framework.as_ref());

        let off = synth().synthesize(kind, &base, profile);
        let on = synth().synthesize(kind, &toggled, profile);

        assert!(off.section(section).is_none());
        assert!(on.section(section).is_some());

        let rest: Vec<&Section> = on.sections.iter().filter(|s| s.id != section).collect();
        let off_refs: Vec<&Section> = off.sections.iter().collect();
        assert_eq!(rest, off_refs, "{kind}: sections other than {section} changed");
    }

    #[test]
    fn commerce_gating_in_both_documents() {
        for kind in DocumentKind::ALL {
            assert_gating(kind, "commerce", |c| c.commerce.enabled = true);
        }
    }

    type Toggle = fn(&mut Configuration);

    /// Conditional section, the documents that may carry it, and a toggle
    /// that should switch it on from an empty configuration.
    const CONDITIONAL: &[(&str, &[DocumentKind], Toggle)] = &[
        ("commerce", &DocumentKind::ALL, |c| c.commerce.enabled = true),
        ("commerce", &DocumentKind::ALL, |c| {
            c.project.website_types = vec![WebsiteType::Ecommerce]
        }),
        ("commerce", &DocumentKind::ALL, |c| {
            c.project.website_types = vec![WebsiteType::Marketplace]
        }),
        ("auth", &DocumentKind::ALL, |c| c.auth.enabled = true),
        ("content", &DocumentKind::ALL, |c| c.content.blog = true),
        ("content", &DocumentKind::ALL, |c| c.content.cms = "sanity".into()),
        ("ai", &DocumentKind::ALL, |c| c.integrations.ai.enabled = true),
        ("integrations", &DocumentKind::ALL, |c| c.integrations.webhooks = true),
        ("i18n", &DocumentKind::ALL, |c| {
            c.project.languages = vec!["en".into(), "fr".into()]
        }),
        ("workflow", &[DocumentKind::DevelopmentConcept], |c| {
            c.workflow.scheduled_jobs = true
        }),
        ("workflow", &[DocumentKind::DevelopmentConcept], |c| {
            c.workflow.automations = vec!["nightly report".into()]
        }),
        ("business", &[DocumentKind::DevelopmentConcept], |c| {
            c.business.modules = vec!["crm".into()]
        }),
        ("business", &[DocumentKind::DevelopmentConcept], |c| {
            c.business.multi_tenant = true
        }),
    ];

    #[test]
    fn each_conditional_section_follows_its_gate() {
        let base = Configuration::default();
        for (section, carriers, toggle) in CONDITIONAL {
            let mut toggled = base.clone();
            toggle(&mut toggled);

            for kind in DocumentKind::ALL {
                let off = synth().synthesize(kind, &base, &DEFAULT_PROFILE);
                let on = synth().synthesize(kind, &toggled, &DEFAULT_PROFILE);
                assert!(off.section(section).is_none(), "{kind}: {section} without its gate");
                assert_eq!(
                    on.section(section).is_some(),
                    carriers.contains(&kind),
                    "{kind}: {section}"
                );
            }
        }
    }

    #[test]
    fn non_commerce_website_types_do_not_open_commerce() {
        let mut config = Configuration::default();
        config.project.website_types = vec![WebsiteType::Blog, WebsiteType::Portfolio];
        for kind in DocumentKind::ALL {
            let doc = synth().synthesize(kind, &config, &DEFAULT_PROFILE);
            assert!(doc.section("commerce").is_none(), "{kind}");
        }
    }

    #[test]
    fn single_locale_is_not_multilingual() {
        let mut config = Configuration::default();
        config.project.languages = vec!["en".into()];
        for kind in DocumentKind::ALL {
            let doc = synth().synthesize(kind, &config, &DEFAULT_PROFILE);
            assert!(doc.section("i18n").is_none(), "{kind}");
        }
    }

    #[test]
    fn punctuation_only_name_still_names_the_repository() {
        let mut config = Configuration::default();
        config.project.name = "???".into();
        let doc = synth().init_prompt(&config, &DEFAULT_PROFILE);
        let deliverables = &doc.section("deliverables").unwrap().body;
        assert!(deliverables.contains("A working `my-project` repository"));
        assert_eq!(doc.title, "Init Prompt: ???");
    }

    #[test]
    fn empty_configuration_renders_every_unconditional_section() {
        let config = Configuration::default();
        for kind in DocumentKind::ALL {
            let doc = synth().synthesize(kind, &config, &DEFAULT_PROFILE);
            assert!(!doc.sections.is_empty());
            assert!(doc.sections.iter().all(|s| !s.body.trim().is_empty()), "{kind}");
            for conditional in ["auth", "commerce", "content", "ai", "integrations", "i18n"] {
                assert!(doc.section(conditional).is_none(), "{kind} has {conditional}");
            }
            let md = doc.to_markdown();
            assert!(md.starts_with("# "));
            assert!(md.contains("my-project"));
        }
    }

    #[test]
    fn rich_configuration_includes_conditional_sections() {
        let config = rich();
        let doc = synth().init_prompt(&config, &DEFAULT_PROFILE);
        for id in ["auth", "content", "ai", "integrations", "i18n"] {
            assert!(doc.section(id).is_some(), "missing {id}");
        }
        let plan = doc.section("build-plan").unwrap();
        assert!(plan.body.contains("### Phase 1: Project Setup"));
        assert!(plan.body.contains("Background Processing"));
    }

    #[test]
    fn unknown_values_render_raw() {
        let mut config = Configuration::default();
        config.stack.framework = Some(Framework::parse("qwik"));
        let doc = synth().init_prompt(&config, &DEFAULT_PROFILE);
        assert!(doc.section("stack").unwrap().body.contains("qwik"));
    }

    #[test]
    fn synthesis_is_deterministic() {
        let config = rich();
        let a = synth().development_concept(&config, &DEFAULT_PROFILE).to_markdown();
        let b = synth().development_concept(&config, &DEFAULT_PROFILE).to_markdown();
        assert_eq!(a, b);
    }

    #[test]
    fn document_kind_parses_aliases() {
        assert_eq!("init-prompt".parse::<DocumentKind>().unwrap(), DocumentKind::InitPrompt);
        assert_eq!(
            "development_concept".parse::<DocumentKind>().unwrap(),
            DocumentKind::DevelopmentConcept
        );
        assert!("readme".parse::<DocumentKind>().is_err());
    }
}
