//! Reference catalog port.
//!
//! The option tables (ids, labels, descriptions) are static reference data
//! owned outside the engine. The domain only needs to turn an id into
//! something a human reads, so it depends on this narrow trait and never on
//! a concrete table.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value_objects::CatalogGroup;

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Reject entries that could never be looked up or displayed.
    pub fn validate(&self, group: CatalogGroup) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidCatalogEntry {
                group: group.to_string(),
                reason: "option id is empty".into(),
            });
        }
        if self.label.trim().is_empty() {
            return Err(DomainError::InvalidCatalogEntry {
                group: group.to_string(),
                reason: format!("option '{}' has an empty label", self.id),
            });
        }
        Ok(())
    }
}

/// Read-only access to the option catalog.
///
/// Implementations must be cheap to query repeatedly; the synthesizer asks
/// for a label for every rendered value.
#[cfg_attr(test, mockall::automock)]
pub trait OptionCatalog: Send + Sync {
    /// Human label for `id`, or `None` when the id is not catalogued.
    fn label(&self, group: CatalogGroup, id: &str) -> Option<String>;

    /// One-line description for `id`, if the catalog has one.
    fn describe(&self, group: CatalogGroup, id: &str) -> Option<String>;

    /// All entries of a group in display order.
    fn entries(&self, group: CatalogGroup) -> Vec<CatalogEntry>;
}

/// A catalog that knows nothing. Every lookup falls back to the raw id.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl OptionCatalog for EmptyCatalog {
    fn label(&self, _group: CatalogGroup, _id: &str) -> Option<String> {
        None
    }

    fn describe(&self, _group: CatalogGroup, _id: &str) -> Option<String> {
        None
    }

    fn entries(&self, _group: CatalogGroup) -> Vec<CatalogEntry> {
        Vec::new()
    }
}

/// Label resolution with raw-value fallback.
///
/// Unknown ids are rendered verbatim so a catalog that lags behind the
/// wizard still produces readable output.
#[derive(Clone, Copy)]
pub struct Labels<'a> {
    catalog: &'a dyn OptionCatalog,
}

impl<'a> Labels<'a> {
    pub fn new(catalog: &'a dyn OptionCatalog) -> Self {
        Self { catalog }
    }

    pub fn label_or_raw(&self, group: CatalogGroup, id: &str) -> String {
        self.catalog
            .label(group, id)
            .unwrap_or_else(|| id.to_string())
    }

    /// Labels for every id, in input order.
    pub fn all<S: AsRef<str>>(&self, group: CatalogGroup, ids: &[S]) -> Vec<String> {
        ids.iter()
            .map(|id| self.label_or_raw(group, id.as_ref()))
            .collect()
    }

    /// Comma-joined labels, or `fallback` when `ids` is empty.
    pub fn join<S: AsRef<str>>(&self, group: CatalogGroup, ids: &[S], fallback: &str) -> String {
        if ids.is_empty() {
            return fallback.to_string();
        }
        self.all(group, ids).join(", ")
    }

    pub fn describe(&self, group: CatalogGroup, id: &str) -> Option<String> {
        self.catalog.describe(group, id)
    }
}
