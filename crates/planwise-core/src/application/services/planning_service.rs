//! Planning Service - main application orchestrator.
//!
//! Wraps the pure engine for callers that start from a file or want every
//! output at once:
//! 1. Load and normalise a configuration snapshot
//! 2. Analyze it and resolve its stack profile
//! 3. Synthesize the requested documents

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{ConfigurationReader, OptionCatalog},
    domain::{
        AnalysisReport, Analyzer, Configuration, DocumentKind, DocumentSynthesizer,
        GeneratedDocument, RecommendField, RecommendationSet, StackProfile, recommend,
        resolve_stack_profile,
    },
    error::PlanwiseResult,
};

/// Everything the engine produces for one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanBundle {
    pub report: AnalysisReport,
    pub profile: &'static StackProfile,
    pub documents: Vec<GeneratedDocument>,
}

impl PlanBundle {
    pub fn document(&self, kind: DocumentKind) -> Option<&GeneratedDocument> {
        self.documents.iter().find(|d| d.kind == kind)
    }
}

/// Main planning service.
pub struct PlanningService {
    catalog: Arc<dyn OptionCatalog>,
    reader: Box<dyn ConfigurationReader>,
    analyzer: Analyzer,
}

impl PlanningService {
    /// Create a planning service with the standard rule catalog.
    pub fn new(catalog: Arc<dyn OptionCatalog>, reader: Box<dyn ConfigurationReader>) -> Self {
        Self {
            catalog,
            reader,
            analyzer: Analyzer::default(),
        }
    }

    /// Replace the rule set, e.g. with a reduced catalog in tests.
    pub fn with_analyzer(mut self, analyzer: Analyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Load a configuration document through the reader port.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(&self, path: &Path) -> PlanwiseResult<Configuration> {
        let config = self.reader.read(path)?;
        debug!(
            sections = config.configured_sections().len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    #[instrument(skip_all, fields(project = %config.project.name))]
    pub fn analyze(&self, config: &Configuration) -> AnalysisReport {
        let report = self.analyzer.analyze(config);
        info!(
            score = report.complexity_score,
            label = %report.complexity_label,
            warnings = report.warnings.len(),
            issues = report.compatibility_issues.len(),
            "Analysis complete"
        );
        if report.has_blocking_errors() {
            warn!("Configuration has error-severity findings");
        }
        report
    }

    pub fn recommend(&self, field: RecommendField, config: &Configuration) -> RecommendationSet {
        let set = recommend(field, config);
        debug!(field = %field, count = set.values.len(), "Recommendations ranked");
        set
    }

    pub fn recommend_all(&self, config: &Configuration) -> Vec<RecommendationSet> {
        RecommendField::ALL
            .into_iter()
            .map(|field| self.recommend(field, config))
            .collect()
    }

    pub fn profile_for(&self, config: &Configuration) -> &'static StackProfile {
        let profile = resolve_stack_profile(
            config.deployment.target.as_ref(),
            config.stack.framework.as_ref(),
        );
        debug!(profile = profile.display_name, "Stack profile resolved");
        profile
    }

    pub fn init_prompt(&self, config: &Configuration) -> GeneratedDocument {
        self.document(DocumentKind::InitPrompt, config)
    }

    pub fn development_concept(&self, config: &Configuration) -> GeneratedDocument {
        self.document(DocumentKind::DevelopmentConcept, config)
    }

    #[instrument(skip(self, config), fields(kind = %kind))]
    pub fn document(&self, kind: DocumentKind, config: &Configuration) -> GeneratedDocument {
        let profile = self.profile_for(config);
        let doc = DocumentSynthesizer::new(self.catalog.as_ref()).synthesize(kind, config, profile);
        info!(sections = doc.sections.len(), "Document synthesized");
        doc
    }

    /// Report, profile and the requested documents in one pass.
    #[instrument(skip_all, fields(project = %config.project.name))]
    pub fn plan(&self, config: &Configuration, kinds: &[DocumentKind]) -> PlanBundle {
        let profile = self.profile_for(config);
        let synthesizer = DocumentSynthesizer::new(self.catalog.as_ref());
        PlanBundle {
            report: self.analyze(config),
            profile,
            documents: kinds
                .iter()
                .map(|&kind| synthesizer.synthesize(kind, config, profile))
                .collect(),
        }
    }

    pub fn plan_file(&self, path: &Path, kinds: &[DocumentKind]) -> PlanwiseResult<PlanBundle> {
        let config = self.load(path)?;
        Ok(self.plan(&config, kinds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::output::MockConfigurationReader;
    use crate::domain::catalog::{EmptyCatalog, MockOptionCatalog};
    use crate::domain::{CatalogGroup, DeploymentTarget, Framework, RuleCatalog};
    use crate::error::PlanwiseError;

    fn service(reader: MockConfigurationReader) -> PlanningService {
        PlanningService::new(Arc::new(EmptyCatalog), Box::new(reader))
    }

    fn nextjs_on_vercel() -> Configuration {
        let mut c = Configuration::default();
        c.project.name = "Launchpad".into();
        c.stack.framework = Some(Framework::NextJs);
        c.deployment.target = Some(DeploymentTarget::Vercel);
        c
    }

    #[test]
    fn plan_file_reads_through_the_port() {
        let mut reader = MockConfigurationReader::new();
        reader
            .expect_read()
            .withf(|path| path.ends_with("plan.json"))
            .times(1)
            .returning(|_| Ok(nextjs_on_vercel()));

        let bundle = service(reader)
            .plan_file(Path::new("plan.json"), &DocumentKind::ALL)
            .unwrap();

        assert_eq!(bundle.profile.display_name, "Next.js on Vercel");
        assert_eq!(bundle.documents.len(), 2);
        assert!(
            bundle
                .document(DocumentKind::InitPrompt)
                .unwrap()
                .title
                .contains("Launchpad")
        );
    }

    #[test]
    fn reader_failures_propagate() {
        let mut reader = MockConfigurationReader::new();
        reader.expect_read().returning(|path| {
            Err(ApplicationError::ConfigurationUnreadable {
                path: path.to_path_buf(),
                reason: "expected value at line 1".into(),
            }
            .into())
        });

        let err = service(reader)
            .plan_file(Path::new("broken.json"), &DocumentKind::ALL)
            .unwrap_err();
        assert!(matches!(
            err,
            PlanwiseError::Application(ApplicationError::ConfigurationUnreadable { .. })
        ));
    }

    #[test]
    fn documents_use_catalog_labels() {
        let mut catalog = MockOptionCatalog::new();
        catalog
            .expect_label()
            .returning(|group, id| match (group, id) {
                (CatalogGroup::Framework, "nextjs") => Some("Next.js".into()),
                _ => None,
            });
        catalog.expect_describe().returning(|_, _| None);
        catalog.expect_entries().returning(|_| Vec::new());

        let service = PlanningService::new(
            Arc::new(catalog),
            Box::new(MockConfigurationReader::new()),
        );
        let doc = service.init_prompt(&nextjs_on_vercel());
        assert!(doc.section("stack").unwrap().body.contains("Next.js"));
    }

    #[test]
    fn custom_analyzer_replaces_standard_rules() {
        let service = service(MockConfigurationReader::new())
            .with_analyzer(Analyzer::new(RuleCatalog::empty()));
        let report = service.analyze(&Configuration::default());
        assert_eq!(report.finding_count(), 0);
        assert_eq!(report.complexity_score, 1);
    }

    #[test]
    fn plan_honours_requested_kinds() {
        let service = service(MockConfigurationReader::new());
        let bundle = service.plan(&Configuration::default(), &[DocumentKind::DevelopmentConcept]);
        assert_eq!(bundle.documents.len(), 1);
        assert!(bundle.document(DocumentKind::InitPrompt).is_none());
    }
}
