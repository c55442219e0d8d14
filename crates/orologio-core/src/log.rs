//! File-based logger with size-based rotation.
//!
//! Logs go to `~/.config/orologio/logs/orologio.log`. When the file
//! grows past the configured max size it is rotated to
//! `orologio.log.1`, keeping a single backup. Disabled by default.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::format::format_sample;

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "orologio.log";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Unknown level strings fall back to `Info`.
    fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

struct Logger {
    file: File,
    path: PathBuf,
    min: Level,
    max_bytes: u64,
    bytes_written: u64,
}

impl Logger {
    fn open(config: &LogConfig) -> Option<Self> {
        let log_dir = crate::config::config_dir()?.join("logs");
        fs::create_dir_all(&log_dir).ok()?;
        let path = log_dir.join(LOG_FILE_NAME);

        let file = append_handle(&path)?;
        let bytes_written = file.metadata().map(|m| m.len()).unwrap_or(0);

        Some(Self {
            file,
            path,
            min: Level::parse(&config.level),
            max_bytes: config.max_file_mb * 1024 * 1024,
            bytes_written,
        })
    }

    fn log(&mut self, level: Level, args: fmt::Arguments<'_>) {
        if level < self.min {
            return;
        }
        let now = format_sample(&SystemClock.now(), "%H:%M:%S");
        let line = format!("{now} [{}] {args}\n", level.as_str());

        let _ = self.file.write_all(line.as_bytes());
        self.bytes_written += line.len() as u64;

        if self.max_bytes > 0 && self.bytes_written >= self.max_bytes {
            self.rotate();
        }
    }

    /// Renames the current file to `orologio.log.1` and starts fresh.
    fn rotate(&mut self) {
        let backup = self.path.with_extension("log.1");
        let _ = fs::rename(&self.path, &backup);
        if let Some(f) = append_handle(&self.path) {
            self.file = f;
        }
        self.bytes_written = 0;
    }
}

fn append_handle(path: &std::path::Path) -> Option<File> {
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Initialises the global logger. Call once at startup.
///
/// Does nothing if `config.enabled` is `false` or the log file cannot
/// be opened.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    if let Some(logger) = Logger::open(config) {
        let _ = LOGGER.set(Mutex::new(logger));
    }
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    if let Ok(mut logger) = mutex.lock() {
        logger.log(level, args);
    }
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ordering_matches_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn level_parse_defaults_to_info() {
        assert_eq!(Level::parse("nonsense"), Level::Info);
        assert_eq!(Level::parse("DEBUG"), Level::Debug);
        assert_eq!(Level::parse("Error"), Level::Error);
    }

    #[test]
    fn default_log_config_is_disabled() {
        let config = LogConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.level, "info");
        assert_eq!(config.max_file_mb, 10);
    }
}
