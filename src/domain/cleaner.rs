//! URL cleaner entry points.

use tracing::{debug, warn};
use url::Url;

use super::rules::{CleanTarget, RuleChain};
use super::{CleanOptions, CleanResult, SettingsStore, SnipError};

/// Clean a URL with the given options.
///
/// Never fails: a malformed input comes back unchanged with `error` set.
pub fn clean_url(input: &str, options: &CleanOptions) -> CleanResult {
    let url = match Url::parse(input) {
        Ok(url) => url,
        Err(e) => {
            let error = SnipError::from(e);
            warn!("Failed to clean URL '{}': {}", input, error);
            return CleanResult::failed(input, error);
        }
    };

    let target = CleanTarget::new(input, url);
    let result = RuleChain::new(options).execute(&target);
    debug!(
        "Cleaned {} -> {} ({} removed)",
        input,
        result.clean_url,
        result.removed_params.len()
    );
    result
}

/// Cleaner bound to a settings store.
pub struct UrlCleaner {
    store: Box<dyn SettingsStore>,
}

impl UrlCleaner {
    /// Create a new UrlCleaner reading settings from `store`.
    pub fn new(store: Box<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Read the current settings and clean `input`.
    pub fn clean(&self, input: &str) -> CleanResult {
        match self.store.read() {
            Ok(options) => clean_url(input, &options),
            Err(e) => {
                warn!("Failed to read settings: {}", e);
                CleanResult::failed(input, e)
            }
        }
    }
}
