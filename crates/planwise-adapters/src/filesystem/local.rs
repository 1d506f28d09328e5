//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use planwise_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{PlanwiseError, PlanwiseResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> PlanwiseResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> PlanwiseResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&self, path: &Path) -> PlanwiseResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_dir_all(&self, path: &Path) -> PlanwiseResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> PlanwiseError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_removes_files() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("docs");
        let file = dir.join("INIT_PROMPT.md");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&file, "# Init Prompt").unwrap();
        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "# Init Prompt");

        fs.remove_file(&file).unwrap();
        assert!(!fs.exists(&file));
        fs.remove_dir_all(&dir).unwrap();
        assert!(!fs.exists(&dir));
    }

    #[test]
    fn write_into_missing_directory_fails_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing/INIT_PROMPT.md");
        let err = LocalFilesystem::new().write_file(&path, "x").unwrap_err();
        assert!(err.to_string().contains("INIT_PROMPT.md"));
    }
}
