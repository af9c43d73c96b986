//! Configuration file support for freezer.
//!
//! Provides YAML-based configuration through `freezer.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! command-line flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::security::{validate_file_size, validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "freezer.config.yml";
pub const DEFAULT_DATABASE: &str = "freezer.db";
pub const DEFAULT_CONSUME_PERCENT: i64 = 25;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub database: Option<PathBuf>,
    pub consume_percent: Option<i64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings after merging CLI flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: PathBuf,
    pub consume_percent: i64,
}

impl Settings {
    /// CLI flag wins over the config file, which wins over the default.
    pub fn resolve(cli_database: Option<PathBuf>, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();
        Self {
            database: cli_database
                .or(config.database)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE)),
            consume_percent: config.consume_percent.unwrap_or(DEFAULT_CONSUME_PERCENT),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    validate_file_size(metadata.len(), path, MAX_CONFIG_FILE_SIZE)?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(percent) = config.consume_percent {
        if !(1..=100).contains(&percent) {
            bail!(
                "Invalid config: consume_percent must be between 1 and 100 (got {}).\n\n\
                 💡 Hint: The amount is a percentage of one item, e.g. 25 for a quarter.",
                percent
            );
        }
    }
    if let Some(ref database) = config.database {
        if database.as_os_str().is_empty() {
            bail!("Invalid config: database must not be empty.");
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "Unknown config field will be ignored");
    }
}
