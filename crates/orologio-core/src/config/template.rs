/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `orologio init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Orologio configuration
# Location: ~/.config/orologio/config.toml

[clock]
# strftime-style display format.
# Supported: %H (hour), %M (minute), %S (second), %A (weekday),
# %d (day), %B (month name), %Y (year), %% (literal %).
format = "%H:%M:%S"
# Refresh interval in milliseconds (clamped to 100..60000).
interval_ms = 1000

[logging]
# Enable file logging to ~/.config/orologio/logs/orologio.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn template_parses_as_valid_toml() {
        let parsed: Result<Config, _> = toml::from_str(&generate_config());
        assert!(parsed.is_ok());
    }

    #[test]
    fn template_matches_built_in_defaults() {
        // The generated file must not silently change behavior when a
        // user runs `init` versus running with no config at all.
        let parsed: Config = toml::from_str(&generate_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(parsed.clock.format, defaults.clock.format);
        assert_eq!(parsed.clock.interval_ms, defaults.clock.interval_ms);
        assert_eq!(parsed.logging.enabled, defaults.logging.enabled);
        assert_eq!(parsed.logging.level, defaults.logging.level);
        assert_eq!(parsed.logging.max_file_mb, defaults.logging.max_file_mb);
    }

    #[test]
    fn template_mentions_every_supported_token() {
        let text = generate_config();
        for token in ["%H", "%M", "%S", "%A", "%d", "%B", "%Y"] {
            assert!(text.contains(token), "missing {token}");
        }
    }
}
