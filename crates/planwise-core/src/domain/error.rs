// ============================================================================
// domain/error.rs - BOUNDARY ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// The engine itself is total: `analyze`, the recommenders and the
/// synthesizer never fail. These errors only arise where free-form input
/// crosses into the domain (a field key typed on a command line, a catalog
/// file with a blank id).
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid catalog entry in group '{group}': {reason}")]
    InvalidCatalogEntry { group: String, reason: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("No recommender for field '{field}'")]
    UnknownField { field: String },

    #[error("Unknown catalog group '{group}'")]
    UnknownCatalogGroup { group: String },

    #[error("Unknown document kind '{kind}'")]
    UnknownDocumentKind { kind: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidConfiguration(msg) => vec![
                "Check the configuration document".into(),
                format!("Details: {}", msg),
            ],
            Self::InvalidCatalogEntry { group, .. } => vec![
                format!("Fix the entry in the '{}' catalog file", group),
                "Every option needs a non-empty id and label".into(),
            ],
            Self::UnknownField { field } => vec![
                format!("'{}' has no recommender", field),
                "Try: planwise recommend --all <FILE> to see every field".into(),
            ],
            Self::UnknownCatalogGroup { group } => vec![
                format!("'{}' is not a catalog group", group),
                "Try: planwise catalog to list groups".into(),
            ],
            Self::UnknownDocumentKind { kind } => vec![
                format!("'{}' is not a document kind", kind),
                "Use one of: init-prompt, concept".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfiguration(_) | Self::InvalidCatalogEntry { .. } => {
                ErrorCategory::Validation
            }
            Self::UnknownField { .. }
            | Self::UnknownCatalogGroup { .. }
            | Self::UnknownDocumentKind { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
