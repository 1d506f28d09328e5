//! Export Service - writes generated documents to disk.
//!
//! All-or-nothing: existing files are refused unless forced, and a failed
//! write removes every file this export created before it.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{AnalysisReport, GeneratedDocument},
    error::PlanwiseResult,
};

/// File name of the optional machine-readable report.
pub const ANALYSIS_FILE_NAME: &str = "analysis.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Overwrite files that already exist.
    pub force: bool,
}

pub struct ExportService {
    filesystem: Box<dyn Filesystem>,
}

impl ExportService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Write each document (and the report, if given) into `out_dir`.
    ///
    /// Returns the written paths in write order.
    #[instrument(skip(self, documents, analysis), fields(out_dir = %out_dir.display()))]
    pub fn export(
        &self,
        out_dir: &Path,
        documents: &[GeneratedDocument],
        analysis: Option<&AnalysisReport>,
        options: ExportOptions,
    ) -> PlanwiseResult<Vec<PathBuf>> {
        let mut files: Vec<(PathBuf, String)> = documents
            .iter()
            .map(|doc| (out_dir.join(doc.kind.file_name()), doc.to_markdown()))
            .collect();

        if let Some(report) = analysis {
            let json = serde_json::to_string_pretty(report).map_err(|e| {
                ApplicationError::SerializationFailed {
                    reason: e.to_string(),
                }
            })?;
            files.push((out_dir.join(ANALYSIS_FILE_NAME), json));
        }

        if !options.force {
            if let Some((path, _)) = files.iter().find(|(path, _)| self.filesystem.exists(path)) {
                return Err(ApplicationError::OutputExists { path: path.clone() }.into());
            }
        }

        let created_dir = !self.filesystem.exists(out_dir);
        self.filesystem.create_dir_all(out_dir)?;

        let mut created = Vec::new();
        let mut written = Vec::new();
        for (path, content) in &files {
            let is_new = !self.filesystem.exists(path);
            if let Err(e) = self.filesystem.write_file(path, content) {
                warn!(path = %path.display(), "Write failed, attempting rollback");
                self.rollback(&created, created_dir.then_some(out_dir));
                return Err(e);
            }
            if is_new {
                created.push(path.clone());
            }
            written.push(path.clone());
        }

        info!(files = written.len(), "Export completed successfully");
        Ok(written)
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, created: &[PathBuf], created_dir: Option<&Path>) {
        for path in created {
            if let Err(e) = self.filesystem.remove_file(path) {
                warn!(error = %e, path = %path.display(), "Rollback failed");
            }
        }
        if let Some(dir) = created_dir {
            if let Err(e) = self.filesystem.remove_dir_all(dir) {
                warn!(error = %e, path = %dir.display(), "Rollback failed");
            }
        }
    }
}
