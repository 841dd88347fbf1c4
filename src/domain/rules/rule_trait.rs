//! Rule trait definition.

use url::Url;

use crate::domain::CleanResult;

/// Parsed URL handed to each rule.
#[derive(Debug, Clone)]
pub struct CleanTarget<'a> {
    /// Input exactly as received
    pub input: &'a str,

    /// Parsed form of `input`
    pub url: Url,

    /// Lowercased hostname, empty for host-less URLs
    pub host: String,
}

impl<'a> CleanTarget<'a> {
    /// Build a target from the raw input and its parsed URL.
    pub fn new(input: &'a str, url: Url) -> Self {
        let host = url.host_str().unwrap_or_default().to_lowercase();
        Self { input, url, host }
    }
}

/// Trait for cleaning rules.
pub trait Rule: Send + Sync {
    /// Check if this rule handles the given target.
    fn applies_to(&self, target: &CleanTarget) -> bool;

    /// Clean the target. Only called when `applies_to` returned true.
    fn execute(&self, target: &CleanTarget) -> CleanResult;

    /// Get the priority of this rule (lower = higher priority).
    fn priority(&self) -> u32;
}
