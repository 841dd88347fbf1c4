//! Rule chain implementation.

use tracing::debug;

use crate::domain::{CleanOptions, CleanResult};

use super::{AmazonRule, CleanTarget, ParamRule, Rule, WhitelistRule};

/// Ordered set of rules. The first rule that applies produces the result.
pub struct RuleChain {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleChain {
    /// Create a new RuleChain from cleaning options.
    pub fn new(options: &CleanOptions) -> Self {
        let mut rules: Vec<Box<dyn Rule>> = Vec::new();

        if !options.whitelist.is_empty() {
            rules.push(Box::new(WhitelistRule::new(options.whitelist.clone())));
        }

        rules.push(Box::new(AmazonRule::new(
            options.associate_tag().map(str::to_string),
        )));

        // Generic parameter stripping always applies
        rules.push(Box::new(ParamRule::new(options)));

        // Sort by priority (lower = higher priority)
        rules.sort_by_key(|r| r.priority());

        Self { rules }
    }

    /// Run the first applicable rule.
    pub fn execute(&self, target: &CleanTarget) -> CleanResult {
        for rule in &self.rules {
            if rule.applies_to(target) {
                debug!(
                    "Rule with priority {} handles host '{}'",
                    rule.priority(),
                    target.host
                );
                return rule.execute(target);
            }
        }

        CleanResult::unchanged(target.input)
    }
}
