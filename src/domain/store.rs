//! Settings store abstraction.

use super::{CleanOptions, SnipError};

/// Source of cleaning settings, read once per cleaning run.
pub trait SettingsStore {
    /// Read the current cleaning settings.
    fn read(&self) -> Result<CleanOptions, SnipError>;
}

impl SettingsStore for CleanOptions {
    fn read(&self) -> Result<CleanOptions, SnipError> {
        Ok(self.clone())
    }
}
