//! Application layer errors.
//!
//! These errors represent failures in orchestration, not planning logic.
//! Boundary input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A configuration document could not be read or parsed.
    #[error("Cannot read configuration {path}: {reason}")]
    ConfigurationUnreadable { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Export target already exists and overwriting was not requested.
    #[error("Output already exists at {path}")]
    OutputExists { path: PathBuf },

    /// A shared store's lock was poisoned by a panicking writer.
    #[error("{store} lock poisoned")]
    LockPoisoned { store: &'static str },

    /// A report could not be serialized for export.
    #[error("Serialization failed: {reason}")]
    SerializationFailed { reason: String },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigurationUnreadable { path, .. } => vec![
                format!("Could not load: {}", path.display()),
                "Configuration files must be JSON (.json) or TOML (.toml)".into(),
                "Keys use camelCase, e.g. websiteTypes, apiStyle".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::OutputExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite".into(),
                "Or choose a different directory with --out".into(),
            ],
            Self::LockPoisoned { store } => vec![
                format!("The {} is in an inconsistent state", store),
                "Try again in a moment".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationUnreadable { .. } => ErrorCategory::Configuration,
            Self::OutputExists { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::RollbackFailed { .. }
            | Self::LockPoisoned { .. }
            | Self::SerializationFailed { .. } => ErrorCategory::Internal,
        }
    }
}
