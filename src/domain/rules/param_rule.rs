//! Generic tracking parameter rule implementation.

use tracing::debug;

use super::{CleanTarget, Rule};
use crate::domain::params::removal_set;
use crate::domain::{CleanOptions, CleanResult};

/// Rule that deletes every configured tracking parameter from the query.
pub struct ParamRule {
    options: CleanOptions,
}

impl ParamRule {
    /// Create a new ParamRule from cleaning options.
    pub fn new(options: &CleanOptions) -> Self {
        Self {
            options: options.clone(),
        }
    }
}

impl Rule for ParamRule {
    fn applies_to(&self, _target: &CleanTarget) -> bool {
        true
    }

    fn execute(&self, target: &CleanTarget) -> CleanResult {
        let mut pairs: Vec<(String, String)> = target.url.query_pairs().into_owned().collect();
        let mut removed_params = Vec::new();

        for name in removal_set(&self.options, &target.host) {
            // First value wins; every occurrence is deleted
            let first = pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| format!("{}={}", name, value));

            if let Some(entry) = first {
                removed_params.push(entry);
                pairs.retain(|(key, _)| *key != name);
            }
        }

        let mut url = target.url.clone();
        if pairs.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(pairs.iter());
        }

        if !removed_params.is_empty() {
            debug!("Removed {:?} from {}", removed_params, target.host);
        }

        CleanResult {
            clean_url: url.to_string(),
            removed_params,
            error: None,
        }
    }

    fn priority(&self) -> u32 {
        100 // Fallback, runs after the special cases
    }
}
