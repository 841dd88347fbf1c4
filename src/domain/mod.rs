//! Domain layer containing core business logic.
//!
//! This module contains:
//! - Result and settings types for URL cleaning
//! - Tracking parameter catalog and hostname matching
//! - Rule trait and implementations (whitelist, Amazon, generic params)
//! - Logger with rotation

mod cleaner;
mod error;
pub mod host;
pub mod logger;
pub mod params;
pub mod rules;
mod store;
mod types;

pub use cleaner::UrlCleaner;

// Allow unused for library API usage
#[allow(unused)]
pub use cleaner::clean_url;
pub use error::SnipError;
pub use store::SettingsStore;
pub use types::{CleanOptions, CleanResult, DomainRule, HistoryItem};
