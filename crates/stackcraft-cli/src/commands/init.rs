//! `stackcraft init`: write a default configuration file.

use std::path::{Path, PathBuf};

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let path = if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    };

    if path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(());
    }

    write_config(&path, &initial_config(config))?;

    output.success(&format!("Configuration created at {}", path.display()))?;
    Ok(())
}

/// Defaults, except that a template directory already in use is recorded.
fn initial_config(current: AppConfig) -> AppConfig {
    AppConfig {
        templates: current.templates,
        ..AppConfig::default()
    }
}

fn write_config(path: &Path, config: &AppConfig) -> CliResult<()> {
    let text = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}
