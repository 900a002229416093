//! `stackcraft config`: read and write configuration values.

use std::path::{Path, PathBuf};

use stackcraft_core::domain::Framework;
use toml::{Table, Value};

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, KNOWN_KEYS},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` path, when given; `set` writes there
/// instead of the default location.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            output.print(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            let path = config_file.unwrap_or_else(AppConfig::default_file);
            set_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.header("Current Configuration:")?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::default_file().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!(
            "Unknown config key '{key}' (known keys: {})",
            KNOWN_KEYS.join(", ")
        ),
        source: None,
    }
}

/// Typed TOML value for `key`, or an error when `raw` does not fit.
fn parse_value(key: &str, raw: &str) -> CliResult<Value> {
    match key {
        "defaults.framework" => {
            let framework: Framework = raw.parse()?;
            Ok(Value::String(framework.as_str().into()))
        }
        "templates.local_path" => Ok(Value::String(raw.into())),
        _ if KNOWN_KEYS.contains(&key) => {
            raw.parse::<bool>()
                .map(Value::Boolean)
                .map_err(|_| CliError::InvalidInput {
                    message: format!("'{key}' expects true or false, got '{raw}'"),
                    source: None,
                })
        }
        _ => Err(unknown_key(key)),
    }
}

/// Update one dotted key in the TOML file at `path`, creating it if needed.
/// Other keys and tables in the file are left alone.
fn set_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let value = parse_value(key, raw)?;

    let mut doc: Table = if path.is_file() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str(&text).map_err(|e| CliError::ConfigError {
            message: format!("'{}' is not valid TOML", path.display()),
            source: Some(Box::new(e)),
        })?
    } else {
        Table::new()
    };

    let (section, field) = key.split_once('.').ok_or_else(|| unknown_key(key))?;
    let table = doc
        .entry(section)
        .or_insert_with(|| Value::Table(Table::new()));
    let Value::Table(table) = table else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' in '{}' is not a table", path.display()),
            source: None,
        });
    };
    table.insert(field.to_owned(), value);

    let text = toml::to_string_pretty(&doc).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_creates_file_and_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\ngit = false\n\n[custom]\nkeep = 1\n").unwrap();

        set_value(&path, "defaults.framework", "express").unwrap();
        set_value(&path, "output.no_color", "true").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.framework, "express");
        assert!(!cfg.defaults.git);
        assert!(cfg.output.no_color);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[custom]"));
    }

    #[test]
    fn set_writes_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        set_value(&path, "defaults.install", "false").unwrap();

        assert!(!AppConfig::load(Some(&path)).unwrap().defaults.install);
    }

    #[test]
    fn framework_value_is_validated() {
        assert!(matches!(
            parse_value("defaults.framework", "fastify"),
            Err(CliError::Core(_))
        ));
        assert_eq!(
            parse_value("defaults.framework", "bun").unwrap(),
            Value::String("bun-native".into())
        );
    }

    #[test]
    fn boolean_keys_reject_other_values() {
        assert!(matches!(
            parse_value("defaults.git", "maybe"),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn unknown_key_is_config_error() {
        assert!(matches!(
            parse_value("does.not.exist", "1"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
