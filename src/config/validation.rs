//! Configuration validation.

use anyhow::{bail, Result};

use super::Config;
use crate::domain::params::is_default_param;

/// Validate a hostname pattern used by the whitelist or a domain rule.
fn validate_host_pattern(field: &str, pattern: &str) -> Result<()> {
    let base = pattern.strip_prefix("*.").unwrap_or(pattern);
    if base.trim().is_empty() {
        bail!("{}: hostname cannot be empty", field);
    }
    if base.chars().any(|c| c.is_whitespace() || c == '/' || c == '*') {
        bail!("{}: invalid hostname pattern '{}'", field, pattern);
    }
    Ok(())
}

/// Validate a parameter name.
fn validate_param(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("{}: parameter name cannot be empty", field);
    }
    Ok(())
}

/// Validate configuration.
pub fn validate(config: &Config) -> Result<()> {
    // Validate paths
    for (name, path) in [
        ("log_path", &config.log_path),
        ("history_path", &config.history_path),
    ] {
        if let Some(path) = path {
            if path.as_os_str().is_empty() {
                bail!("Invalid {}: path cannot be empty", name);
            }
            if path.to_string_lossy().contains('\0') {
                bail!("Invalid {}: contains null character", name);
            }
        }
    }

    // Validate clipboard command
    if let Some(program) = config.clipboard_command.first() {
        if program.trim().is_empty() {
            bail!("clipboard_command: program cannot be empty");
        }
    }

    // Validate associate tag
    if let Some(tag) = &config.amazon_associate_id {
        if tag.trim().is_empty() {
            bail!("amazon_associate_id: cannot be empty (remove the key instead)");
        }
        if tag.trim().chars().any(char::is_whitespace) {
            bail!("amazon_associate_id: '{}' must not contain whitespace", tag);
        }
    }

    for (i, param) in config.custom_params.iter().enumerate() {
        validate_param(&format!("custom_params[{}]", i), param)?;
    }

    for (i, param) in config.disabled_default_params.iter().enumerate() {
        if !is_default_param(param) {
            bail!(
                "disabled_default_params[{}]: '{}' is not a default tracking parameter",
                i,
                param
            );
        }
    }

    for (i, domain) in config.whitelist.iter().enumerate() {
        validate_host_pattern(&format!("whitelist[{}]", i), domain)?;
    }

    // Validate domain rules
    for (i, rule) in config.domain_params.iter().enumerate() {
        if rule.domains.is_empty() {
            bail!("domain_params[{}]: domains cannot be empty", i);
        }
        if rule.params.is_empty() {
            bail!("domain_params[{}]: params cannot be empty", i);
        }
        for (j, domain) in rule.domains.iter().enumerate() {
            validate_host_pattern(&format!("domain_params[{}].domains[{}]", i, j), domain)?;
        }
        for (j, param) in rule.params.iter().enumerate() {
            validate_param(&format!("domain_params[{}].params[{}]", i, j), param)?;
        }
    }

    Ok(())
}
