//! Persisted pomodoro settings
//!
//! Settings live in ~/.config/toolsjet/pomodoro.json. The timer itself is
//! never persisted.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::settings::SessionSettings;

/// Settings file store
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved settings.
    ///
    /// A missing file gives the defaults. An unreadable, malformed or invalid
    /// file is logged and also gives the defaults.
    pub fn load(&self) -> SessionSettings {
        if !self.path.exists() {
            return SessionSettings::default();
        }

        let settings = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings: {}", self.path.display()))
            .and_then(|content| {
                serde_json::from_str::<SessionSettings>(&content)
                    .with_context(|| format!("Failed to parse settings: {}", self.path.display()))
            })
            .and_then(|settings| {
                settings.validate()?;
                Ok(settings)
            });

        match settings {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Using default pomodoro settings: {:#}", e);
                SessionSettings::default()
            }
        }
    }

    /// Save settings, creating the config directory if needed
    pub fn save(&self, settings: &SessionSettings) -> Result<()> {
        settings.validate()?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write settings: {}", self.path.display()))
    }
}
