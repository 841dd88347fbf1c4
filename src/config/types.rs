//! Configuration data types.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::validation;
use crate::domain::{CleanOptions, DomainRule, SettingsStore, SnipError};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory (defaults to `<config dir>/logs`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Path to history file (defaults to `<config dir>/history.json`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_path: Option<PathBuf>,

    /// Clipboard helper: program followed by its arguments
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clipboard_command: Vec<String>,

    /// Amazon associate tag appended to product permalinks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_associate_id: Option<String>,

    /// Additional parameter names to remove on every site
    pub custom_params: Vec<String>,

    /// Hostnames exempt from cleaning (subdomains included)
    pub whitelist: Vec<String>,

    /// Built-in parameter names to keep
    pub disabled_default_params: Vec<String>,

    /// Per-site parameter rules
    pub domain_params: Vec<DomainRule>,

    /// Directory of the file this config was loaded from
    #[serde(skip)]
    pub config_dir: Option<PathBuf>,
}

impl Config {
    /// Validate configuration and return errors if invalid.
    /// Delegates to the comprehensive validation module.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Cleaning-related subset of the configuration.
    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions {
            custom_params: self.custom_params.clone(),
            whitelist: self.whitelist.clone(),
            disabled_default_params: self.disabled_default_params.clone(),
            domain_params: self.domain_params.clone(),
            amazon_associate_id: self.amazon_associate_id.clone(),
        }
    }

    /// Resolved log directory.
    pub fn log_dir(&self) -> PathBuf {
        self.log_path
            .clone()
            .unwrap_or_else(|| base_dir(self.config_dir.as_deref()).join("logs"))
    }

    /// Resolved history file.
    pub fn history_file(&self) -> PathBuf {
        self.history_path
            .clone()
            .unwrap_or_else(|| base_dir(self.config_dir.as_deref()).join("history.json"))
    }
}

impl SettingsStore for Config {
    fn read(&self) -> Result<CleanOptions, SnipError> {
        Ok(self.clean_options())
    }
}

/// Default configuration directory.
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("sniplink")
}

/// Directory that holds logs and history for a config directory.
fn base_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(default_config_dir)
}
