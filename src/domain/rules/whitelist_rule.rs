//! Whitelist rule implementation.

use super::{CleanTarget, Rule};
use crate::domain::host::is_whitelisted;
use crate::domain::CleanResult;

/// Rule that leaves whitelisted hosts untouched.
pub struct WhitelistRule {
    domains: Vec<String>,
}

impl WhitelistRule {
    /// Create a new WhitelistRule.
    pub fn new(domains: Vec<String>) -> Self {
        Self { domains }
    }
}

impl Rule for WhitelistRule {
    fn applies_to(&self, target: &CleanTarget) -> bool {
        is_whitelisted(&target.host, &self.domains)
    }

    fn execute(&self, target: &CleanTarget) -> CleanResult {
        // Verbatim input, not the normalized URL
        CleanResult::unchanged(target.input)
    }

    fn priority(&self) -> u32 {
        0 // Short-circuits everything else
    }
}
