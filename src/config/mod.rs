//! Configuration loading.
//!
//! A missing file is not an error: every field has a default, so partial
//! files load too.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, UiConfig, LOG_LEVELS, MAX_HIGHLIGHT_MS};
