//! Service layer containing business logic orchestration.

mod clean_service;
pub mod clipboard;
pub mod history;
mod settings_service;

pub use clean_service::{CleanRequest, CleanService};
pub use clipboard::CommandClipboard;
pub use history::JsonHistoryLog;
pub use settings_service::SettingsService;
