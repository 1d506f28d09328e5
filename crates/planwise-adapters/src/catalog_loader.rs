//! Filesystem-based catalog loader.
//!
//! Discovers `*.toml` catalog files under a directory tree and overlays
//! them onto an [`InMemoryCatalog`]. Each file extends exactly one group.
//!
//! # File format
//!
//! ```toml
//! group = "framework"            # any catalog group, kebab-case
//!
//! [[options]]
//! id          = "qwik"
//! label       = "Qwik"
//! description = "Resumable framework"   # optional
//! ```
//!
//! An `id` that already exists in the group replaces the existing label and
//! description; new ids are appended.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use planwise_core::{
    application::ApplicationError,
    domain::{CatalogEntry, CatalogGroup, DomainError},
    error::PlanwiseResult,
};

use crate::catalog_store::InMemoryCatalog;

// ── File types ────────────────────────────────────────────────────────────────

/// Deserialised representation of one catalog file.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogFile {
    pub group: String,
    #[serde(default)]
    pub options: Vec<CatalogEntry>,
}

/// One parsed file, ready to overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOverlay {
    pub source: PathBuf,
    pub group: CatalogGroup,
    pub entries: Vec<CatalogEntry>,
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads catalog overlays from a directory tree.
///
/// Files that fail to parse, name an unknown group or contain an invalid
/// entry are skipped with a `WARN` log; they do not block other files.
pub struct CatalogLoader {
    catalog_dir: PathBuf,
}

impl CatalogLoader {
    pub fn new(catalog_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
        }
    }

    /// Parse every catalog file, in file-name order.
    ///
    /// # Errors
    ///
    /// Fails only when the directory itself is missing or cannot be walked.
    #[instrument(skip(self), fields(dir = %self.catalog_dir.display()))]
    pub fn load_all(&self) -> PlanwiseResult<Vec<CatalogOverlay>> {
        if !self.catalog_dir.is_dir() {
            return Err(ApplicationError::FilesystemError {
                path: self.catalog_dir.clone(),
                reason: "catalog directory not found".into(),
            }
            .into());
        }

        let mut overlays = Vec::new();
        for walk_entry in WalkDir::new(&self.catalog_dir)
            .min_depth(1)
            .sort_by_file_name()
        {
            let walk_entry = walk_entry.map_err(|e| ApplicationError::FilesystemError {
                path: self.catalog_dir.clone(),
                reason: format!("directory walk error: {e}"),
            })?;

            let path = walk_entry.path();
            if !walk_entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some("toml")
            {
                continue;
            }

            match load_file(path) {
                Ok(overlay) => {
                    debug!(
                        file = %path.display(),
                        group = %overlay.group,
                        count = overlay.entries.len(),
                        "loaded catalog file"
                    );
                    overlays.push(overlay);
                }
                Err(e) => {
                    warn!(
                        file = %path.display(),
                        error = %e,
                        "skipping catalog file due to load error"
                    );
                }
            }
        }

        Ok(overlays)
    }

    /// Load every file and overlay it onto `catalog`.
    ///
    /// Returns the number of entries applied.
    pub fn apply_to(&self, catalog: &InMemoryCatalog) -> PlanwiseResult<usize> {
        let mut applied = 0;
        for overlay in self.load_all()? {
            applied += overlay.entries.len();
            catalog.overlay(overlay.group, overlay.entries)?;
        }
        info!(entries = applied, "Catalog directory applied");
        Ok(applied)
    }
}

fn load_file(path: &Path) -> Result<CatalogOverlay, DomainError> {
    let invalid = |reason: String| DomainError::InvalidCatalogEntry {
        group: path.display().to_string(),
        reason,
    };

    let raw = fs::read_to_string(path).map_err(|e| invalid(format!("failed to read: {e}")))?;
    let file: CatalogFile =
        toml::from_str(&raw).map_err(|e| invalid(format!("failed to parse: {e}")))?;
    let group: CatalogGroup = file.group.parse()?;

    for entry in &file.options {
        entry.validate(group)?;
    }

    Ok(CatalogOverlay {
        source: path.to_path_buf(),
        group,
        entries: file.options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use planwise_core::application::ports::OptionCatalog;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn load_all_returns_error_for_missing_dir() {
        let loader = CatalogLoader::new("/definitely/not/here");
        assert!(loader.load_all().is_err());
    }

    #[test]
    fn loads_nested_files_in_name_order() {
        let temp = TempDir::new().unwrap();
        write(
            &temp,
            "b-frameworks.toml",
            r#"
group = "framework"

[[options]]
id = "qwik"
label = "Qwik"
description = "Resumable framework"
"#,
        );
        write(
            &temp,
            "a/cms.toml",
            r#"
group = "cms"

[[options]]
id = "keystatic"
label = "Keystatic"
"#,
        );
        write(&temp, "notes.txt", "ignored");

        let overlays = CatalogLoader::new(temp.path()).load_all().unwrap();
        let groups: Vec<CatalogGroup> = overlays.iter().map(|o| o.group).collect();
        assert_eq!(groups, vec![CatalogGroup::Cms, CatalogGroup::Framework]);
        assert_eq!(overlays[1].entries[0].description, "Resumable framework");
    }

    #[test]
    fn invalid_files_are_skipped() {
        let temp = TempDir::new().unwrap();
        write(&temp, "broken.toml", "group = ");
        write(&temp, "unknown.toml", "group = \"colours\"\n");
        write(
            &temp,
            "blank.toml",
            "group = \"cms\"\n\n[[options]]\nid = \"\"\nlabel = \"Nothing\"\n",
        );
        write(&temp, "ok.toml", "group = \"locale\"\n\n[[options]]\nid = \"pl\"\nlabel = \"Polish\"\n");

        let overlays = CatalogLoader::new(temp.path()).load_all().unwrap();
        assert_eq!(overlays.len(), 1);
        assert_eq!(overlays[0].group, CatalogGroup::Locale);
    }

    #[test]
    fn overlay_replaces_builtin_labels() {
        let temp = TempDir::new().unwrap();
        write(
            &temp,
            "frameworks.toml",
            "group = \"framework\"\n\n[[options]]\nid = \"nextjs\"\nlabel = \"Next.js (App Router)\"\n",
        );

        let catalog = InMemoryCatalog::with_builtin().unwrap();
        let applied = CatalogLoader::new(temp.path()).apply_to(&catalog).unwrap();

        assert_eq!(applied, 1);
        assert_eq!(
            catalog.label(CatalogGroup::Framework, "nextjs").as_deref(),
            Some("Next.js (App Router)")
        );
    }
}
