//! Rule engine.
//!
//! [`Analyzer::analyze`] runs every rule of its [`RuleCatalog`] over one
//! configuration snapshot and folds the results into an [`AnalysisReport`].
//! It never fails: an empty configuration yields the minimum score plus
//! whatever "nothing selected" warnings fire.

pub mod bands;
pub mod rules;

use serde::Serialize;

use crate::domain::configuration::Configuration;
use crate::domain::value_objects::Severity;

pub use bands::{ComplexityLabel, MAX_SCORE, MIN_SCORE};
pub use rules::{Rule, RuleCatalog};

// ── Findings ─────────────────────────────────────────────────────────────────

/// A problem with the configuration. Severity is advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// Id of the rule that produced this finding.
    pub rule: &'static str,
    pub severity: Severity,
    pub message: String,
    pub field: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub rule: &'static str,
    pub message: String,
}

/// An incompatible pair or small set of choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityIssue {
    pub rule: &'static str,
    pub message: String,
    pub fields: &'static [&'static str],
}

// ── Report ───────────────────────────────────────────────────────────────────

/// Which major subsystems the configuration turns on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainFlags {
    pub commerce: bool,
    pub authentication: bool,
    pub ai: bool,
    pub content: bool,
    pub business: bool,
    pub multilingual: bool,
    pub realtime: bool,
}

impl DomainFlags {
    pub fn from_configuration(config: &Configuration) -> Self {
        Self {
            commerce: config.sells_online(),
            authentication: config.auth.enabled,
            ai: config.integrations.ai.enabled,
            content: config.has_content_publishing(),
            business: !config.business.modules.is_empty(),
            multilingual: config.is_multilingual(),
            realtime: config.features.realtime,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeEstimate {
    pub configured_section_count: usize,
    pub total_feature_count: usize,
    pub estimated_effort: &'static str,
    pub domain_flags: DomainFlags,
}

/// Aggregate output of all rules for one snapshot.
///
/// Fully derived: analysing the same configuration twice yields equal
/// reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Always within `MIN_SCORE..=MAX_SCORE`.
    pub complexity_score: u8,
    pub complexity_label: ComplexityLabel,
    pub scope_estimate: ScopeEstimate,
    pub warnings: Vec<Warning>,
    pub suggestions: Vec<Suggestion>,
    pub compatibility_issues: Vec<CompatibilityIssue>,
}

impl AnalysisReport {
    /// Whether any error-severity warning exists.
    ///
    /// Callers decide whether that blocks anything; the engine does not.
    pub fn has_blocking_errors(&self) -> bool {
        self.warnings.iter().any(|w| w.severity == Severity::Error)
    }

    pub fn warnings_with(&self, severity: Severity) -> impl Iterator<Item = &Warning> {
        self.warnings.iter().filter(move |w| w.severity == severity)
    }

    pub fn warning(&self, rule: &str) -> Option<&Warning> {
        self.warnings.iter().find(|w| w.rule == rule)
    }

    /// Total number of findings of every kind.
    pub fn finding_count(&self) -> usize {
        self.warnings.len() + self.suggestions.len() + self.compatibility_issues.len()
    }
}

// ── Analyzer ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Analyzer {
    rules: RuleCatalog,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(RuleCatalog::standard())
    }
}

impl Analyzer {
    pub fn new(rules: RuleCatalog) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleCatalog {
        &self.rules
    }

    pub fn analyze(&self, config: &Configuration) -> AnalysisReport {
        let config = &config.clone().normalized();
        let mut points: u32 = 0;
        let mut warnings = Vec::new();
        let mut suggestions = Vec::new();
        let mut compatibility_issues = Vec::new();

        for rule in self.rules.rules() {
            match *rule {
                Rule::Score { max, weigh, .. } => {
                    points = points.saturating_add(weigh(config).min(max));
                }
                Rule::Warning {
                    id,
                    severity,
                    field,
                    check,
                } => {
                    if let Some(message) = check(config) {
                        warnings.push(Warning {
                            rule: id,
                            severity,
                            message,
                            field,
                        });
                    }
                }
                Rule::Compatibility { id, fields, check } => {
                    if let Some(message) = check(config) {
                        compatibility_issues.push(CompatibilityIssue {
                            rule: id,
                            message,
                            fields,
                        });
                    }
                }
                Rule::Suggestion { id, check } => {
                    if let Some(message) = check(config) {
                        suggestions.push(Suggestion { rule: id, message });
                    }
                }
            }
        }

        let score = bands::clamp_score(points);

        AnalysisReport {
            complexity_score: score,
            complexity_label: bands::complexity_label(score),
            scope_estimate: ScopeEstimate {
                configured_section_count: config.configured_sections().len(),
                total_feature_count: config.feature_count(),
                estimated_effort: bands::estimated_effort(score),
                domain_flags: DomainFlags::from_configuration(config),
            },
            warnings,
            suggestions,
            compatibility_issues,
        }
    }
}

/// Analyze with the standard rule catalog.
pub fn analyze(config: &Configuration) -> AnalysisReport {
    Analyzer::default().analyze(config)
}
