//! # Configuration Management Module
//!
//! Settings for a play session, read from a small TOML file. Every field has a
//! default, so a missing file just means a default session.
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - RNG seed and presentation toggles
//! - [`LoggingConfig`] - Log level and optional log file
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! seed = 1234      # optional: replay the same rolls every run
//! intro = true
//!
//! [logging]
//! level = "warn"
//! file = "kingdoms-call.log"
//! ```
//!
//! Precedence: CLI args > config file > defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fixed RNG seed. When unset every run draws a fresh seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Show the welcome banner before character creation.
    #[serde(default = "default_intro")]
    pub intro: bool,
}

fn default_intro() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            seed: None,
            intro: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Map `level` to a filter. Unknown values fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.to_ascii_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" | "warning" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => {
                eprintln!(
                    "Invalid logging level '{}', defaulting to warn",
                    self.level
                );
                log::LevelFilter::Warn
            }
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Load the file if present, otherwise fall back to defaults.
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Config::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.game.seed, None);
        assert!(config.game.intro);
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[game]\nseed = 99\n").unwrap();
        assert_eq!(config.game.seed, Some(99));
        assert!(config.game.intro);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_level_filter_mapping() {
        let test_cases = vec![
            ("off", log::LevelFilter::Off),
            ("error", log::LevelFilter::Error),
            ("WARN", log::LevelFilter::Warn),
            ("info", log::LevelFilter::Info),
            ("Debug", log::LevelFilter::Debug),
            ("trace", log::LevelFilter::Trace),
            ("loud", log::LevelFilter::Warn),
            ("", log::LevelFilter::Warn),
        ];

        for (level, expected) in test_cases {
            let config = LoggingConfig {
                level: level.to_string(),
                file: None,
            };
            assert_eq!(config.level_filter(), expected, "level {:?}", level);
        }
    }

    #[test]
    fn test_create_default_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kingdoms-call.toml");
        let path = path.to_str().unwrap();
        Config::create_default(path).unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("[game]"));
        assert!(!written.contains("seed"), "unset seed should be omitted: {}", written);
        let loaded = Config::load(path).unwrap();
        assert_eq!(loaded.logging.level, "warn");
        assert!(loaded.game.intro);
    }

    #[test]
    fn test_load_or_default_missing_and_broken() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let config = Config::load_or_default(missing.to_str().unwrap()).unwrap();
        assert_eq!(config.game.seed, None);

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[game\nseed = ").unwrap();
        let err = Config::load_or_default(broken.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
