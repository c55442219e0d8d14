mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for Orologio.
///
/// Loaded from `~/.config/orologio/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clock display settings.
    pub clock: ClockConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Clock display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// strftime-style display format (e.g. "%H:%M:%S").
    pub format: String,
    /// Refresh interval in milliseconds.
    pub interval_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            format: "%H:%M:%S".into(),
            interval_ms: 1000,
        }
    }
}

impl Config {
    /// Clamps configured values to safe ranges.
    ///
    /// Prevents a zero interval from spinning the tick thread and an
    /// empty format from rendering a blank display.
    pub fn validate(&mut self) {
        self.clock.interval_ms = self.clock.interval_ms.clamp(100, 60_000);
        if self.clock.format.is_empty() {
            self.clock.format = ClockConfig::default().format;
        }
    }
}
