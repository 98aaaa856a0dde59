//! Viewer settings, persisted as `config.toml`.
//!
//! The editor location is fixed and intentionally absent from here.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 300;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl ViewerConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns one message per invalid value; empty when the config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.window.width < MIN_WINDOW_WIDTH {
            errors.push(format!("window.width must be at least {MIN_WINDOW_WIDTH}"));
        }
        if self.window.height < MIN_WINDOW_HEIGHT {
            errors.push(format!("window.height must be at least {MIN_WINDOW_HEIGHT}"));
        }
        if self.log.filter.trim().is_empty() {
            errors.push("log.filter must not be empty".to_string());
        }

        errors
    }

    /// Returns a copy with every invalid value replaced by its default.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            window: WindowConfig {
                width: if self.window.width < MIN_WINDOW_WIDTH {
                    defaults.window.width
                } else {
                    self.window.width
                },
                height: if self.window.height < MIN_WINDOW_HEIGHT {
                    defaults.window.height
                } else {
                    self.window.height
                },
            },
            log: LogConfig {
                filter: if self.log.filter.trim().is_empty() {
                    defaults.log.filter
                } else {
                    self.log.filter.clone()
                },
            },
        }
    }
}

/// Initial window size in logical pixels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> u32 {
    900
}

fn default_height() -> u32 {
    700
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing-subscriber` filter directive, overridden by `MDUG_LOG`.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "mdug_core=info,mdug_windows=info,mdug_macos=info".to_string()
}
