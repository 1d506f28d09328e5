//! Configuration file reader.
//!
//! Reads a wizard export from disk. `.toml` files are parsed as TOML and
//! everything else as JSON. Missing sections and fields fall back to their
//! defaults, and the snapshot is normalised before it is returned.

use std::{fs, path::Path};

use tracing::{debug, instrument};

use planwise_core::{
    application::{ApplicationError, ports::ConfigurationReader},
    domain::Configuration,
    error::PlanwiseResult,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationFileReader;

impl ConfigurationFileReader {
    pub fn new() -> Self {
        Self
    }

    /// Parse `raw` as the format implied by `path`'s extension.
    pub fn parse(path: &Path, raw: &str) -> PlanwiseResult<Configuration> {
        let unreadable = |reason: String| ApplicationError::ConfigurationUnreadable {
            path: path.to_path_buf(),
            reason,
        };

        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

        let config: Configuration = if is_toml {
            toml::from_str(raw).map_err(|e| unreadable(e.to_string()))?
        } else {
            serde_json::from_str(raw).map_err(|e| unreadable(e.to_string()))?
        };

        Ok(config.normalized())
    }
}

impl ConfigurationReader for ConfigurationFileReader {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn read(&self, path: &Path) -> PlanwiseResult<Configuration> {
        let raw = fs::read_to_string(path).map_err(|e| {
            ApplicationError::ConfigurationUnreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
        debug!(bytes = raw.len(), "Configuration file read");
        Self::parse(path, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planwise_core::domain::{DeploymentTarget, Framework, WebsiteType};
    use tempfile::TempDir;

    #[test]
    fn reads_partial_json_with_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wizard.json");
        fs::write(
            &path,
            r#"{"project": {"name": " Shopfront ", "websiteTypes": ["ecommerce", ""]},
                "stack": {"framework": "nextjs", "database": ""}}"#,
        )
        .unwrap();

        let config = ConfigurationFileReader::new().read(&path).unwrap();
        assert_eq!(config.project.name, "Shopfront");
        assert_eq!(config.project.website_types, vec![WebsiteType::Ecommerce]);
        assert_eq!(config.stack.framework, Some(Framework::NextJs));
        assert!(config.stack.database.is_none());
        assert!(config.security.ssl);
    }

    #[test]
    fn reads_toml_by_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wizard.toml");
        fs::write(
            &path,
            "[project]\nname = \"Docs\"\n\n[deployment]\ntarget = \"github-pages\"\n",
        )
        .unwrap();

        let config = ConfigurationFileReader::new().read(&path).unwrap();
        assert_eq!(config.deployment.target, Some(DeploymentTarget::GithubPages));
    }

    #[test]
    fn malformed_documents_are_unreadable() {
        let err = ConfigurationFileReader::parse(Path::new("bad.json"), "{ nope").unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn missing_files_are_unreadable() {
        let result = ConfigurationFileReader::new().read(Path::new("/no/such/wizard.json"));
        assert!(result.is_err());
    }
}
