use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Capture mouse clicks on keypad buttons (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
    /// Show the key hint footer (default: true).
    #[serde(default = "default_show_footer")]
    pub show_footer: bool,
    /// How long a pressed button stays highlighted, in milliseconds (default: 150).
    #[serde(default = "default_highlight_ms")]
    pub highlight_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level filter: trace, debug, info, warn, error or off (default: info).
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file used by the interactive UI.
    /// Defaults to `padcalc.log` in the user cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Upper bound for `ui.highlight_ms`.
pub const MAX_HIGHLIGHT_MS: u64 = 2000;

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

fn default_mouse() -> bool {
    true
}

fn default_show_footer() -> bool {
    true
}

fn default_highlight_ms() -> u64 {
    150
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse: default_mouse(),
            show_footer: default_show_footer(),
            highlight_ms: default_highlight_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Resolved log file path.
    pub fn file_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("padcalc")
                .join("padcalc.log"),
        }
    }
}
