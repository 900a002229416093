//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `STACKCRAFT__*` environment variables (`STACKCRAFT__DEFAULTS__GIT=false`)
//! 3. The `--config` file, else `.stackcraft.toml` in the current directory,
//!    else the per-user config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use stackcraft_core::domain::{Framework, ScaffoldOptions};

/// File name of a project-local config.
pub const LOCAL_CONFIG_FILE: &str = ".stackcraft.toml";

/// Prefix for environment overrides; nested keys are joined with `__`.
const ENV_PREFIX: &str = "STACKCRAFT";

/// Every key `config get` and `config set` understand.
pub const KNOWN_KEYS: &[&str] = &[
    "defaults.framework",
    "defaults.install",
    "defaults.git",
    "defaults.docker_databases",
    "defaults.docker_app",
    "output.no_color",
    "templates.local_path",
];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub framework: String,
    pub install: bool,
    pub git: bool,
    pub docker_databases: bool,
    pub docker_app: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        let options = ScaffoldOptions::default();
        Self {
            framework: Framework::default().as_str().into(),
            install: options.install,
            git: options.git,
            docker_databases: options.dockerize_databases,
            docker_app: options.dockerize_app,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory holding `base/`, `base-express/`, `extras/` and so on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from defaults, one config file and the environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.  The
    /// implicit files are optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("defaults.framework", defaults.defaults.framework)?
            .set_default("defaults.install", defaults.defaults.install)?
            .set_default("defaults.git", defaults.defaults.git)?
            .set_default("defaults.docker_databases", defaults.defaults.docker_databases)?
            .set_default("defaults.docker_app", defaults.defaults.docker_app)?
            .set_default("output.no_color", defaults.output.no_color)?;

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.as_path()).required(true)),
            None => builder.add_source(
                File::from(Self::default_file().as_path()).required(false),
            ),
        };

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?;

        config
            .try_deserialize()
            .context("configuration has invalid values")
    }

    /// The file `load` reads when no `--config` is given: a local
    /// `.stackcraft.toml` when present, otherwise [`Self::config_path`].
    pub fn default_file() -> PathBuf {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            local
        } else {
            Self::config_path()
        }
    }

    /// Path to the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stackcraft.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "stackcraft", "stackcraft")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Configured default framework, if it names one.
    pub fn default_framework(&self) -> Result<Framework, stackcraft_core::domain::DomainError> {
        self.defaults.framework.parse()
    }

    /// Scaffold switches before CLI opt-outs are applied.
    pub fn scaffold_options(&self) -> ScaffoldOptions {
        ScaffoldOptions {
            install: self.defaults.install,
            git: self.defaults.git,
            dockerize_databases: self.defaults.docker_databases,
            dockerize_app: self.defaults.docker_app,
        }
    }

    /// Value of a dotted key, rendered for display.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.framework" => self.defaults.framework.clone(),
            "defaults.install" => self.defaults.install.to_string(),
            "defaults.git" => self.defaults.git.to_string(),
            "defaults.docker_databases" => self.defaults.docker_databases.to_string(),
            "defaults.docker_app" => self.defaults.docker_app.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "templates.local_path" => self
                .templates
                .local_path
                .as_deref()
                .map(Path::display)
                .map(|p| p.to_string())
                .unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_scaffold_options() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.framework, "hono");
        assert_eq!(cfg.scaffold_options(), ScaffoldOptions::default());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stackcraft.toml");
        std::fs::write(
            &path,
            "[defaults]\nframework = \"express\"\ngit = false\n\n[templates]\nlocal_path = \"/srv/templates\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.framework, "express");
        assert!(!cfg.defaults.git);
        assert!(cfg.defaults.install);
        assert_eq!(cfg.templates.local_path, Some(PathBuf::from("/srv/templates")));
        assert_eq!(cfg.default_framework().unwrap(), Framework::Express);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/stackcraft.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn every_known_key_is_readable() {
        let cfg = AppConfig::default();
        for key in KNOWN_KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
        assert!(cfg.get("defaults.language").is_none());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
