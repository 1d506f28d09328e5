//! Catalog Service - option catalog queries.
//!
//! Separated from PlanningService for single responsibility.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::{
    application::ports::OptionCatalog,
    domain::{CatalogEntry, CatalogGroup},
};

/// Group name and size, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub group: CatalogGroup,
    pub entries: usize,
}

pub struct CatalogService {
    catalog: Arc<dyn OptionCatalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn OptionCatalog>) -> Self {
        Self { catalog }
    }

    /// Every group in [`CatalogGroup::ALL`] order, including empty ones.
    pub fn groups(&self) -> Vec<GroupSummary> {
        CatalogGroup::ALL
            .into_iter()
            .map(|group| GroupSummary {
                group,
                entries: self.catalog.entries(group).len(),
            })
            .collect()
    }

    pub fn entries(&self, group: CatalogGroup) -> Vec<CatalogEntry> {
        let entries = self.catalog.entries(group);
        debug!(group = %group, count = entries.len(), "Catalog group listed");
        entries
    }

    /// Label for one id, falling back to the id itself.
    pub fn label(&self, group: CatalogGroup, id: &str) -> String {
        self.catalog
            .label(group, id)
            .unwrap_or_else(|| id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::MockOptionCatalog;
    use mockall::predicate::eq;

    #[test]
    fn groups_report_sizes_in_order() {
        let mut catalog = MockOptionCatalog::new();
        catalog
            .expect_entries()
            .with(eq(CatalogGroup::Framework))
            .returning(|_| {
                vec![
                    CatalogEntry::new("nextjs", "Next.js"),
                    CatalogEntry::new("astro", "Astro"),
                ]
            });
        catalog.expect_entries().returning(|_| Vec::new());

        let groups = CatalogService::new(Arc::new(catalog)).groups();
        assert_eq!(groups.len(), CatalogGroup::ALL.len());
        let framework = groups
            .iter()
            .find(|g| g.group == CatalogGroup::Framework)
            .unwrap();
        assert_eq!(framework.entries, 2);
        assert!(
            groups
                .iter()
                .filter(|g| g.group != CatalogGroup::Framework)
                .all(|g| g.entries == 0)
        );
    }

    #[test]
    fn label_falls_back_to_id() {
        let mut catalog = MockOptionCatalog::new();
        catalog.expect_label().returning(|_, _| None);
        let service = CatalogService::new(Arc::new(catalog));
        assert_eq!(service.label(CatalogGroup::Cms, "strapi"), "strapi");
    }
}
