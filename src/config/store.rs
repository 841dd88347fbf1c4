//! File-backed settings store.

use std::path::PathBuf;

use super::ConfigService;
use crate::domain::{CleanOptions, SettingsStore, SnipError};

/// Settings store that re-reads the config file on every read.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Create a store for the config file at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsStore for FileSettingsStore {
    fn read(&self) -> Result<CleanOptions, SnipError> {
        let config = ConfigService::read(&self.path)
            .and_then(|config| config.validate().map(|_| config))
            .map_err(|e| SnipError::Config(format!("{:#}", e)))?;
        Ok(config.clean_options())
    }
}
