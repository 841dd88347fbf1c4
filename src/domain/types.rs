//! Core domain types for URL cleaning.

use serde::{Deserialize, Serialize};

/// Per-site parameter rule.
///
/// ```toml
/// [[domain_params]]
/// domains = ["*.youtube.com", "youtu.be"]
/// params = ["si", "feature"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRule {
    /// Hostname patterns, exact (`example.com`) or wildcard (`*.example.com`)
    pub domains: Vec<String>,

    /// Parameter names removed when the hostname matches
    pub params: Vec<String>,
}

/// Settings that drive a cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// User-defined parameter names removed on every site
    pub custom_params: Vec<String>,

    /// Hostnames exempt from cleaning
    pub whitelist: Vec<String>,

    /// Built-in parameter names the user turned off
    pub disabled_default_params: Vec<String>,

    /// Extra parameters for specific sites
    pub domain_params: Vec<DomainRule>,

    /// Amazon associate tag appended to product permalinks
    pub amazon_associate_id: Option<String>,
}

impl CleanOptions {
    /// Associate tag, ignoring blank values.
    pub fn associate_tag(&self) -> Option<&str> {
        self.amazon_associate_id
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// Outcome of cleaning a single URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanResult {
    /// Cleaned URL, or the input unchanged on error or whitelist hit
    pub clean_url: String,

    /// Removed parameters as `name=value`, in removal order
    pub removed_params: Vec<String>,

    /// Error message when the input could not be cleaned
    pub error: Option<String>,
}

impl CleanResult {
    /// Result that passes the input through untouched.
    pub fn unchanged(input: &str) -> Self {
        Self {
            clean_url: input.to_string(),
            removed_params: Vec::new(),
            error: None,
        }
    }

    /// Result carrying an error, with the input as the fallback URL.
    pub fn failed(input: &str, error: impl ToString) -> Self {
        Self {
            clean_url: input.to_string(),
            removed_params: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    /// Whether any parameter was removed.
    pub fn changed(&self) -> bool {
        !self.removed_params.is_empty()
    }

    /// Status line shown after copying.
    pub fn status_message(&self) -> String {
        match self.removed_params.len() {
            0 => "Copied URL (no parameters removed)".to_string(),
            n => format!("Copied clean URL (removed {} parameters)", n),
        }
    }
}

/// Entry in the cleaning history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    /// URL as it was before cleaning
    pub original_url: String,

    /// URL after cleaning
    pub clean_url: String,

    /// Parameters that were removed
    pub removed_params: Vec<String>,

    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}
