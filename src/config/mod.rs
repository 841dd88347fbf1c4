//! Configuration management module.
//!
//! Handles TOML configuration file loading, validation, updates and default generation.

mod service;
mod store;
mod types;
mod validation;

pub use service::ConfigService;
pub use store::FileSettingsStore;
pub use types::Config;
pub use validation::validate;
