//! In-memory option catalog with built-in tables.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use planwise_core::{
    application::{ApplicationError, ports::OptionCatalog},
    domain::{CatalogEntry, CatalogGroup},
    error::{PlanwiseError, PlanwiseResult},
};

use crate::builtin_catalog;

/// Thread-safe in-memory catalog.
///
/// Entries keep insertion order within a group. Inserting an id that
/// already exists replaces it in place, which is how catalog files overlay
/// the built-in tables.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<BTreeMap<CatalogGroup, Vec<CatalogEntry>>>>,
}

fn poisoned() -> PlanwiseError {
    ApplicationError::LockPoisoned {
        store: "option catalog",
    }
    .into()
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in tables loaded.
    pub fn with_builtin() -> PlanwiseResult<Self> {
        let catalog = Self::new();
        catalog.load_builtin()?;
        Ok(catalog)
    }

    /// Load the built-in tables.
    pub fn load_builtin(&self) -> PlanwiseResult<()> {
        for group in CatalogGroup::ALL {
            self.overlay(group, builtin_catalog::builtin_entries(group))?;
        }
        Ok(())
    }

    /// Insert or replace one entry after validating it.
    pub fn insert(&self, group: CatalogGroup, entry: CatalogEntry) -> PlanwiseResult<()> {
        entry.validate(group)?;

        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        let entries = inner.entry(group).or_default();
        match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
        Ok(())
    }

    /// Insert every entry of `entries` into `group`.
    pub fn overlay(&self, group: CatalogGroup, entries: Vec<CatalogEntry>) -> PlanwiseResult<()> {
        let count = entries.len();
        for entry in entries {
            self.insert(group, entry)?;
        }
        debug!(group = %group, count, "Catalog entries loaded");
        Ok(())
    }

    /// Total number of entries across all groups.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find(&self, group: CatalogGroup, id: &str) -> Option<CatalogEntry> {
        let inner = self.inner.read().ok()?;
        inner.get(&group)?.iter().find(|e| e.id == id).cloned()
    }
}

impl OptionCatalog for InMemoryCatalog {
    fn label(&self, group: CatalogGroup, id: &str) -> Option<String> {
        self.find(group, id).map(|e| e.label)
    }

    fn describe(&self, group: CatalogGroup, id: &str) -> Option<String> {
        self.find(group, id)
            .map(|e| e.description)
            .filter(|d| !d.is_empty())
    }

    fn entries(&self, group: CatalogGroup) -> Vec<CatalogEntry> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.get(&group).cloned())
            .unwrap_or_default()
    }
}
