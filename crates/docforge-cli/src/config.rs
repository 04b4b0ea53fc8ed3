//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `DOCFORGE_*` environment variables, `__` between key segments
//!    (`DOCFORGE_GIT__ENABLED=false`)
//! 3. Config file: `--config <FILE>` or `config.toml` in the platform
//!    config directory
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use docforge_adapters::DEFAULT_TEMPLATE;
use docforge_core::application::services::DEFAULT_COMMIT_MESSAGE;

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "DOCFORGE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub defaults: Defaults,
    pub git: GitConfig,
    pub templates: TemplateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Template highlighted in the template prompt.
    pub template: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    pub enabled: bool,
    pub commit_message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            commit_message: DEFAULT_COMMIT_MESSAGE.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of templates used instead of the bundled set.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration. An explicit `config_file` must exist; the default
    /// location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let file = match config_file {
            Some(path) => toml_file(path).required(true),
            None => toml_file(&Self::config_path()).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| CliError::Config {
                message: e.to_string(),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "docforge", "docforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".docforge.toml"))
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.template, "default");
        assert!(cfg.git.enabled);
        assert_eq!(cfg.git.commit_message, DEFAULT_COMMIT_MESSAGE);
        assert!(cfg.templates.dir.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docforge.toml");
        fs::write(
            &path,
            "[defaults]\ntemplate = \"minimal\"\n\n[git]\nenabled = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.template, "minimal");
        assert!(!cfg.git.enabled);
        // untouched keys keep their defaults
        assert_eq!(cfg.git.commit_message, DEFAULT_COMMIT_MESSAGE);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = AppConfig::load(Some(&temp.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[git\nenabled = ").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
