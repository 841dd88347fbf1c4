//! Cleaning history persisted as a capped JSON list.

use std::fs;
use std::path::PathBuf;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing::debug;

use crate::domain::{HistoryItem, SnipError};

/// Maximum number of entries kept, newest first.
pub const MAX_HISTORY_ITEMS: usize = 10;

/// Storage for cleaning history.
pub trait HistoryLog {
    /// Record a cleaning run as the newest entry.
    fn add(&self, item: HistoryItem) -> Result<(), SnipError>;

    /// All entries, newest first.
    fn entries(&self) -> Result<Vec<HistoryItem>, SnipError>;

    /// Remove every entry.
    fn clear(&self) -> Result<(), SnipError>;
}

/// Prepend `item` and drop the oldest entries beyond the cap.
pub fn push_capped(history: Vec<HistoryItem>, item: HistoryItem) -> Vec<HistoryItem> {
    std::iter::once(item)
        .chain(history)
        .take(MAX_HISTORY_ITEMS)
        .collect()
}

/// Current time in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Human-friendly age of a history entry.
pub fn format_timestamp(timestamp: i64, now: i64) -> String {
    let diff = now - timestamp;
    let minutes = diff / 60_000;
    let hours = diff / 3_600_000;
    let days = diff / 86_400_000;

    let plural = |n: i64| if n == 1 { "" } else { "s" };

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{} minute{} ago", minutes, plural(minutes));
    }
    if hours < 24 {
        return format!("{} hour{} ago", hours, plural(hours));
    }
    if days < 7 {
        return format!("{} day{} ago", days, plural(days));
    }

    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetDateTime::from_unix_timestamp_nanos(timestamp as i128 * 1_000_000)
        .ok()
        .and_then(|dt| {
            dt.to_offset(offset)
                .format(format_description!("[year]-[month]-[day]"))
                .ok()
        })
        .unwrap_or_else(|| timestamp.to_string())
}

/// History log stored in a JSON file.
pub struct JsonHistoryLog {
    path: PathBuf,
}

impl JsonHistoryLog {
    /// Create a history log backed by `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn write(&self, items: &[HistoryItem]) -> Result<(), SnipError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl HistoryLog for JsonHistoryLog {
    fn add(&self, item: HistoryItem) -> Result<(), SnipError> {
        let history = push_capped(self.entries()?, item);
        debug!(
            "Writing {} history entries to {}",
            history.len(),
            self.path.display()
        );
        self.write(&history)
    }

    fn entries(&self) -> Result<Vec<HistoryItem>, SnipError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            SnipError::History(format!(
                "Failed to parse history file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn clear(&self) -> Result<(), SnipError> {
        self.write(&[])
    }
}
