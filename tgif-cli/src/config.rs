//! Persisted display preference.
//!
//! One setting survives restarts: the 12h/24h clock format toggled from
//! the timer. It lives in a tiny TOML file under the user's config
//! directory. Persistence is strictly best-effort: a missing, unreadable,
//! or corrupt file falls back to defaults, and save failures are logged
//! at debug level and otherwise ignored. The countdown never fails over a
//! preference.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tgif_core::TimeFormat;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Clock format as its string form, "12h" or "24h".
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_time_format() -> String {
    TimeFormat::default().as_str().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config { time_format: default_time_format() }
    }
}

impl Config {
    /// Parsed format preference; unrecognized values read as the default.
    pub fn time_format(&self) -> TimeFormat {
        self.time_format.parse().unwrap_or_default()
    }

    pub fn set_time_format(&mut self, format: TimeFormat) {
        self.time_format = format.as_str().to_string();
    }
}

/// Config directory: `<platform config dir>/tgif/`.
fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tgif"))
}

/// Load the saved preference, or defaults if there is none.
pub fn load() -> Config {
    let Some(dir) = config_dir() else {
        return Config::default();
    };
    let path = dir.join(CONFIG_FILE);

    std::fs::read_to_string(&path)
        .inspect_err(|e| log::debug!("no config at {}: {e}", path.display()))
        .ok()
        .and_then(|s| {
            toml::from_str(&s)
                .inspect_err(|e| log::debug!("ignoring malformed config: {e}"))
                .ok()
        })
        .unwrap_or_default()
}

/// Save the preference, creating the directory if needed.
pub fn save(config: &Config) {
    let Some(dir) = config_dir() else {
        return;
    };
    if let Err(e) = std::fs::create_dir_all(&dir) {
        log::debug!("failed to create config directory: {e}");
        return;
    }

    let serialized = match toml::to_string_pretty(config) {
        Ok(s) => s,
        Err(e) => {
            log::debug!("failed to serialize config: {e}");
            return;
        }
    };
    let path = dir.join(CONFIG_FILE);
    if let Err(e) = std::fs::write(&path, serialized) {
        log::debug!("failed to save config to {}: {e}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_twenty_four_hour() {
        assert_eq!(Config::default().time_format(), TimeFormat::TwentyFourHour);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.set_time_format(TimeFormat::TwelveHour);

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.time_format(), TimeFormat::TwelveHour);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed.time_format(), TimeFormat::TwentyFourHour);
    }

    #[test]
    fn test_unrecognized_value_reads_as_default() {
        let parsed: Config = toml::from_str("time_format = \"metric\"").unwrap();
        assert_eq!(parsed.time_format(), TimeFormat::TwentyFourHour);
    }
}
