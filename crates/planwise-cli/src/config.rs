//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `PLANWISE__*` environment variables, e.g. `PLANWISE__EXPORT__DIRECTORY`
//! 3. `--config FILE`, or else `./.planwise.toml` over the platform file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// File name used by `planwise init --local`.
pub const LOCAL_CONFIG_FILE: &str = ".planwise.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory of `*.toml` catalog files overlaid on the built-in tables.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `human` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Default `--out` for `generate`.
    pub directory: Option<PathBuf>,
    pub include_analysis: bool,
}

impl AppConfig {
    /// Load configuration from defaults, files and the environment.
    ///
    /// An explicit `config_file` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", defaults.output.format)?
            .set_default("export.include_analysis", defaults.export.include_analysis)?;

        builder = match config_file {
            Some(path) => builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(true),
            ),
            None => builder
                .add_source(
                    File::from(Self::config_path())
                        .format(FileFormat::Toml)
                        .required(false),
                )
                .add_source(
                    File::from(Path::new(LOCAL_CONFIG_FILE))
                        .format(FileFormat::Toml)
                        .required(false),
                ),
        };

        builder
            .add_source(
                Environment::with_prefix("PLANWISE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("building configuration")?
            .try_deserialize()
            .context("deserializing configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.planwise.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "planwise", "planwise")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Look up one dotted key, as printed by `planwise config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let path = |p: &Option<PathBuf>| {
            p.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        };
        match key {
            "catalog.directory" => Some(path(&self.catalog.directory)),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            "export.directory" => Some(path(&self.export.directory)),
            "export.include_analysis" => Some(self.export.include_analysis.to_string()),
            _ => None,
        }
    }

    /// Every key `get` understands.
    pub const KEYS: [&'static str; 5] = [
        "catalog.directory",
        "output.no_color",
        "output.format",
        "export.directory",
        "export.include_analysis",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_human_without_export_dir() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.output.format, "human");
        assert!(!cfg.output.no_color);
        assert!(cfg.export.directory.is_none());
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("planwise.toml");
        fs::write(
            &path,
            "[output]\nformat = \"json\"\n\n[export]\ndirectory = \"docs\"\ninclude_analysis = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.output.format, "json");
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.export.directory, Some(PathBuf::from("docs")));
        assert!(cfg.export.include_analysis);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/planwise.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("output.format").as_deref(), Some("human"));
        assert_eq!(cfg.get("export.directory").as_deref(), Some(""));
        assert!(cfg.get("defaults.lang").is_none());
        assert!(AppConfig::KEYS.iter().all(|k| cfg.get(k).is_some()));
    }

    #[test]
    fn default_round_trips_through_toml() {
        let raw = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&raw).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
