//! Configuration file support for user-directory.
//!
//! Provides YAML-based configuration through `user-directory.config.yml`
//! files, including data structures, file loading, validation and
//! resolution into runtime [`Settings`].

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::cache::DIRECTORY_FRESHNESS;
use crate::shared::error::DirectoryError;
use crate::shared::{Result, DEFAULT_DEBOUNCE};

pub const CONFIG_FILENAME: &str = "user-directory.config.yml";

/// Top-level configuration file schema. Every field is optional.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub directory_ttl_secs: Option<u64>,
    pub search_debounce_ms: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub log_level: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective runtime settings after applying defaults and overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub directory_ttl: Duration,
    pub search_debounce: Duration,
    pub request_timeout: Duration,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            directory_ttl: DIRECTORY_FRESHNESS,
            search_debounce: DEFAULT_DEBOUNCE,
            request_timeout: DEFAULT_TIMEOUT,
            log_level: None,
        }
    }
}

impl Settings {
    /// Resolves settings: CLI override, then config file, then defaults.
    pub fn resolve(config: Option<ConfigFile>, base_url_override: Option<String>) -> Self {
        let defaults = Settings::default();
        let config = config.unwrap_or_default();

        Self {
            base_url: base_url_override
                .or(config.base_url)
                .unwrap_or(defaults.base_url),
            directory_ttl: config
                .directory_ttl_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.directory_ttl),
            search_debounce: config
                .search_debounce_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.search_debounce),
            request_timeout: config
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            log_level: config.log_level,
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
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
    if let Some(ref base_url) = config.base_url {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(DirectoryError::InvalidConfig {
                field: "base_url".to_string(),
                reason: format!("'{}' must start with http:// or https://", base_url),
            }
            .into());
        }
    }

    for (field, value) in [
        ("search_debounce_ms", config.search_debounce_ms),
        ("request_timeout_secs", config.request_timeout_secs),
    ] {
        if value == Some(0) {
            return Err(DirectoryError::InvalidConfig {
                field: field.to_string(),
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
///
/// Runs before logging is set up, so this goes straight to stderr.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
