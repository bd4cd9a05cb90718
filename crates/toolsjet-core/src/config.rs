//! Configuration management for ToolsJet tools

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Global ToolsJet configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Delay before recomputing debounced tool output (milliseconds)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Sound the terminal bell when a pomodoro phase completes
    #[serde(default = "default_chime")]
    pub chime: bool,

    /// Tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_chime() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            chime: default_chime(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load config from file
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Load config, falling back to defaults if the file is unreadable
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {:#}", e);
                Self::default()
            }
        }
    }

    /// Names accepted by [`Config::set`]
    pub const KEYS: &'static [&'static str] = &["debounce_ms", "chime", "log_filter"];

    /// Update one field from its text form. The config is untouched on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "debounce_ms" => {
                let ms: u64 = value
                    .parse()
                    .with_context(|| format!("debounce_ms must be a whole number of milliseconds, got '{}'", value))?;
                if ms == 0 {
                    bail!("debounce_ms must be greater than 0");
                }
                self.debounce_ms = ms;
            }
            "chime" => {
                self.chime = match value.to_lowercase().as_str() {
                    "on" | "true" | "yes" | "1" => true,
                    "off" | "false" | "no" | "0" => false,
                    _ => bail!("chime must be on or off, got '{}'", value),
                };
            }
            "log_filter" => {
                if value.is_empty() {
                    bail!("log_filter must not be empty");
                }
                self.log_filter = value.to_string();
            }
            _ => bail!("Unknown config key '{}' (expected one of: {})", key, Self::KEYS.join(", ")),
        }
        Ok(())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }
}
