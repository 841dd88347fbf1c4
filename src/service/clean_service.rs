//! Clean-and-copy orchestration.

use anyhow::{bail, Result};
use tracing::{debug, info, warn};

use crate::domain::{CleanResult, HistoryItem, UrlCleaner};
use crate::service::clipboard::Clipboard;
use crate::service::history::{now_millis, HistoryLog};

/// What to do with a cleaned URL besides returning it.
#[derive(Debug, Clone, Copy)]
pub struct CleanRequest {
    /// Write the clean URL to the clipboard
    pub copy: bool,
    /// Record the run in the history log when something was removed
    pub record_history: bool,
}

impl Default for CleanRequest {
    fn default() -> Self {
        Self {
            copy: true,
            record_history: true,
        }
    }
}

/// Result of a clean-and-copy run.
#[derive(Debug)]
pub struct CleanOutcome {
    pub result: CleanResult,
    /// Clipboard write status; `None` when copying was not requested
    pub copied: Option<Result<(), String>>,
    pub recorded: bool,
}

/// Service that cleans URLs, copies them and keeps history.
pub struct CleanService {
    cleaner: UrlCleaner,
    clipboard: Box<dyn Clipboard>,
    history: Box<dyn HistoryLog>,
}

impl CleanService {
    /// Create a new CleanService.
    pub fn new(
        cleaner: UrlCleaner,
        clipboard: Box<dyn Clipboard>,
        history: Box<dyn HistoryLog>,
    ) -> Self {
        Self {
            cleaner,
            clipboard,
            history,
        }
    }

    /// Clean `input`, then copy and record it as requested.
    ///
    /// A result carrying an error is returned without copying.
    pub fn run(&self, input: &str, request: CleanRequest) -> CleanOutcome {
        let result = self.cleaner.clean(input);

        if let Some(error) = &result.error {
            warn!("Failed to clean URL: {}", error);
            return CleanOutcome {
                result,
                copied: None,
                recorded: false,
            };
        }

        let copied = request.copy.then(|| {
            self.clipboard
                .write_text(&result.clean_url)
                .map_err(|e| e.to_string())
        });

        let recorded = request.record_history && result.changed() && self.record(input, &result);

        info!(
            "Cleaned URL: removed={} copied={:?} recorded={}",
            result.removed_params.len(),
            copied,
            recorded
        );

        CleanOutcome {
            result,
            copied,
            recorded,
        }
    }

    /// Append a history entry, logging failures instead of returning them.
    fn record(&self, original: &str, result: &CleanResult) -> bool {
        let item = HistoryItem {
            original_url: original.to_string(),
            clean_url: result.clean_url.clone(),
            removed_params: result.removed_params.clone(),
            timestamp: now_millis(),
        };

        match self.history.add(item) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to record history: {}", e);
                false
            }
        }
    }

    /// History entries, newest first.
    pub fn history(&self) -> Result<Vec<HistoryItem>> {
        Ok(self.history.entries()?)
    }

    /// Remove all history entries.
    pub fn clear_history(&self) -> Result<()> {
        self.history.clear()?;
        info!("History cleared");
        Ok(())
    }

    /// Copy the clean URL of history entry `index` (1-based, newest first).
    pub fn copy_from_history(&self, index: usize) -> Result<HistoryItem> {
        let entries = self.history.entries()?;
        let Some(item) = index.checked_sub(1).and_then(|i| entries.get(i)) else {
            bail!("No history entry #{} ({} recorded)", index, entries.len());
        };

        debug!("Copying history entry #{}", index);
        self.clipboard.write_text(&item.clean_url)?;
        Ok(item.clone())
    }
}
