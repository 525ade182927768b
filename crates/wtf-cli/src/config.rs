//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`WTF_TEMPLATES_DIR`, `.env` included)
//! 3. Config file (`--config FILE` or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Environment variable pointing at a template override directory.
pub const TEMPLATES_DIR_ENV: &str = "WTF_TEMPLATES_DIR";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for scaffold runs.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Behave as if `--withexamples` was always passed.
    pub with_examples: bool,
    /// Behave as if `--force` was always passed.
    pub force: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory whose files replace the built-in templates.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from `config_file`, or from [`Self::config_path`]
    /// when none was given.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::from_file(&path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// Apply environment overrides; `lookup` is `std::env::var` outside tests.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(TEMPLATES_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            self.templates.local_path = Some(PathBuf::from(dir));
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.wtf-init.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "wtframework", "wtf-init")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".wtf-init.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_scaffold_without_extras() {
        let cfg = AppConfig::default();
        assert!(!cfg.defaults.with_examples);
        assert!(!cfg.defaults.force);
        assert!(!cfg.output.no_color);
        assert!(cfg.templates.local_path.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[defaults]\nwith_examples = true\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let cfg = AppConfig::from_file(&path).unwrap();
        assert!(cfg.defaults.with_examples);
        assert!(!cfg.defaults.force);
        assert_eq!(cfg.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[defaults\n").unwrap();
        assert!(AppConfig::from_file(&path).is_err());
    }

    #[test]
    fn env_sets_template_dir() {
        let mut cfg = AppConfig::default();
        cfg.apply_env(|key| (key == TEMPLATES_DIR_ENV).then(|| "/srv/wtf".to_string()));
        assert_eq!(cfg.templates.local_path, Some(PathBuf::from("/srv/wtf")));
    }

    #[test]
    fn blank_env_is_ignored() {
        let mut cfg = AppConfig::default();
        cfg.templates.local_path = Some(PathBuf::from("/from/file"));
        cfg.apply_env(|_| Some("  ".into()));
        assert_eq!(cfg.templates.local_path, Some(PathBuf::from("/from/file")));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
