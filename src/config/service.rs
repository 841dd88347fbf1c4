//! Configuration service for loading, generating and updating config files.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::types::default_config_dir;
use super::Config;

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path.
    /// Always uses ~/.config/sniplink/config.toml for cross-platform consistency.
    pub fn default_path() -> PathBuf {
        default_config_dir().join("config.toml")
    }

    /// Resolve an optional path to the file that will be used.
    pub fn resolve(path: Option<&Path>) -> PathBuf {
        path.map(PathBuf::from).unwrap_or_else(Self::default_path)
    }

    /// Load configuration from file.
    ///
    /// If `path` is `None`, uses the default path.
    /// If the file doesn't exist, creates default configuration file.
    /// Validates configuration after loading.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = Self::resolve(path);

        if !path.exists() {
            // Create default config file
            Self::generate_at(&path)?;
        }

        let config = Self::read(&path)?;

        // Validate configuration
        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    /// Read and parse a config file without validating it.
    pub fn read(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // Logs and history live next to the config file unless set explicitly
        config.config_dir = path.parent().map(Path::to_path_buf);

        Ok(config)
    }

    /// Write configuration to file, replacing its contents.
    pub fn save(path: &Path, config: &Config) -> Result<()> {
        config
            .validate()
            .with_context(|| format!("Refusing to write invalid configuration to {}", path.display()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(config).context("Failed to serialize configuration")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Load, modify and save the configuration at `path`.
    ///
    /// The closure replaces whole values; comments in the file are not kept.
    pub fn update<F>(path: &Path, modify: F) -> Result<Config>
    where
        F: FnOnce(&mut Config),
    {
        if !path.exists() {
            Self::generate_at(path)?;
        }

        let mut config = Self::read(path)?;
        modify(&mut config);
        Self::save(path, &config)?;

        info!("Updated configuration at {}", path.display());
        Ok(config)
    }

    /// Write the default configuration file to `path`.
    ///
    /// An existing file holds user settings and is only replaced when `force` is set.
    pub fn init(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Configuration file already exists: {} (use --force to overwrite)",
                path.display()
            );
        }
        Self::generate_at(path)
    }

    /// Generate default configuration file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = Self::default_config_content();
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration content with comments.
    fn default_config_content() -> String {
        r#"# sniplink configuration file
# https://github.com/owayo/sniplink

# Enable debug logging to file (default: false)
debug = false

# Path to log directory (default: same directory as config.toml/logs)
# log_path = "~/.config/sniplink/logs"

# Path to history file (default: same directory as config.toml/history.json)
# history_path = "~/.config/sniplink/history.json"

# Clipboard helper, program then arguments (default: auto-detect)
# clipboard_command = ["xclip", "-selection", "clipboard"]

# Amazon associate tag appended to cleaned product links
# amazon_associate_id = "yourtag-20"

# Extra parameters removed on every site
custom_params = []

# Sites that are never cleaned (subdomains included)
whitelist = []

# Built-in tracking parameters to keep (run `sniplink params defaults` for the list)
disabled_default_params = []

# Per-site parameter rules
# [[domain_params]]
# domains = ["*.youtube.com", "youtu.be"]
# params = ["si", "feature"]
"#
        .to_string()
    }
}
