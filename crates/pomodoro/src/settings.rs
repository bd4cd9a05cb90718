//! Session settings and the pending edit buffer
//!
//! `SessionSettings` is the active configuration. User edits go through a
//! `SettingsDraft` first: each field is parsed from raw text and rejected if
//! it is not a positive whole number, so a half-typed value can never reach a
//! running timer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::phase::Phase;

pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;
pub const DEFAULT_LONG_BREAK_INTERVAL: u32 = 4;

/// Longest configurable phase (one day)
pub const MAX_MINUTES: u32 = 24 * 60;

/// Errors produced while editing or applying settings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: SettingField, value: String },

    #[error("{field} must be greater than zero")]
    NotPositive { field: SettingField },

    #[error("{field} must be at most {max}")]
    TooLarge { field: SettingField, max: u32 },

    #[error("{field} must be on or off, got '{value}'")]
    NotAFlag { field: SettingField, value: String },

    #[error("Unknown setting: {0}")]
    UnknownField(String),
}

/// One user-editable setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    FocusMinutes,
    ShortBreakMinutes,
    LongBreakMinutes,
    LongBreakInterval,
    AutoStartBreaks,
    AutoStartFocus,
}

impl SettingField {
    pub const ALL: [SettingField; 6] = [
        SettingField::FocusMinutes,
        SettingField::ShortBreakMinutes,
        SettingField::LongBreakMinutes,
        SettingField::LongBreakInterval,
        SettingField::AutoStartBreaks,
        SettingField::AutoStartFocus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingField::FocusMinutes => "focus_minutes",
            SettingField::ShortBreakMinutes => "short_break_minutes",
            SettingField::LongBreakMinutes => "long_break_minutes",
            SettingField::LongBreakInterval => "long_break_interval",
            SettingField::AutoStartBreaks => "auto_start_breaks",
            SettingField::AutoStartFocus => "auto_start_focus",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "focus_minutes" | "focus" => Some(SettingField::FocusMinutes),
            "short_break_minutes" | "short_break" | "short" => Some(SettingField::ShortBreakMinutes),
            "long_break_minutes" | "long_break" | "long" => Some(SettingField::LongBreakMinutes),
            "long_break_interval" | "interval" => Some(SettingField::LongBreakInterval),
            "auto_start_breaks" | "auto_breaks" => Some(SettingField::AutoStartBreaks),
            "auto_start_focus" | "auto_focus" => Some(SettingField::AutoStartFocus),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingField::FocusMinutes => "Focus duration",
            SettingField::ShortBreakMinutes => "Short break duration",
            SettingField::LongBreakMinutes => "Long break duration",
            SettingField::LongBreakInterval => "Long break interval",
            SettingField::AutoStartBreaks => "Auto-start breaks",
            SettingField::AutoStartFocus => "Auto-start focus",
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, SettingField::AutoStartBreaks | SettingField::AutoStartFocus)
    }
}

impl std::fmt::Display for SettingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Active session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
    /// Completed focus sessions per long break
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: u32,
    #[serde(default)]
    pub auto_start_breaks: bool,
    #[serde(default)]
    pub auto_start_focus: bool,
}

fn default_focus_minutes() -> u32 {
    DEFAULT_FOCUS_MINUTES
}

fn default_short_break_minutes() -> u32 {
    DEFAULT_SHORT_BREAK_MINUTES
}

fn default_long_break_minutes() -> u32 {
    DEFAULT_LONG_BREAK_MINUTES
}

fn default_long_break_interval() -> u32 {
    DEFAULT_LONG_BREAK_INTERVAL
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            focus_minutes: DEFAULT_FOCUS_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
            long_break_interval: DEFAULT_LONG_BREAK_INTERVAL,
            auto_start_breaks: false,
            auto_start_focus: false,
        }
    }
}

impl SessionSettings {
    /// Configured length of a phase in minutes
    pub fn duration_minutes(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Focus => self.focus_minutes,
            Phase::ShortBreak => self.short_break_minutes,
            Phase::LongBreak => self.long_break_minutes,
        }
    }

    /// Configured length of a phase in seconds
    pub fn duration_seconds(&self, phase: Phase) -> u32 {
        self.duration_minutes(phase).saturating_mul(60)
    }

    /// The break that follows the focus session numbered `completed` (1-based)
    pub fn break_after(&self, completed: u32) -> Phase {
        if self.long_break_interval > 0 && completed % self.long_break_interval == 0 {
            Phase::LongBreak
        } else {
            Phase::ShortBreak
        }
    }

    /// Check the duration and interval invariants
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_minutes(SettingField::FocusMinutes, self.focus_minutes)?;
        check_minutes(SettingField::ShortBreakMinutes, self.short_break_minutes)?;
        check_minutes(SettingField::LongBreakMinutes, self.long_break_minutes)?;
        if self.long_break_interval == 0 {
            return Err(SettingsError::NotPositive {
                field: SettingField::LongBreakInterval,
            });
        }
        Ok(())
    }

    /// Current value of a field, rendered for display
    pub fn get(&self, field: SettingField) -> String {
        match field {
            SettingField::FocusMinutes => self.focus_minutes.to_string(),
            SettingField::ShortBreakMinutes => self.short_break_minutes.to_string(),
            SettingField::LongBreakMinutes => self.long_break_minutes.to_string(),
            SettingField::LongBreakInterval => self.long_break_interval.to_string(),
            SettingField::AutoStartBreaks => on_off(self.auto_start_breaks).to_string(),
            SettingField::AutoStartFocus => on_off(self.auto_start_focus).to_string(),
        }
    }
}

fn check_minutes(field: SettingField, minutes: u32) -> Result<(), SettingsError> {
    if minutes == 0 {
        Err(SettingsError::NotPositive { field })
    } else if minutes > MAX_MINUTES {
        Err(SettingsError::TooLarge {
            field,
            max: MAX_MINUTES,
        })
    } else {
        Ok(())
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn parse_count(field: SettingField, raw: &str) -> Result<u32, SettingsError> {
    let value: i64 = raw.trim().parse().map_err(|_| SettingsError::NotANumber {
        field,
        value: raw.to_string(),
    })?;

    if value <= 0 {
        return Err(SettingsError::NotPositive { field });
    }

    let value = u32::try_from(value).map_err(|_| SettingsError::TooLarge {
        field,
        max: MAX_MINUTES,
    })?;

    if field != SettingField::LongBreakInterval {
        check_minutes(field, value)?;
    }
    Ok(value)
}

fn parse_flag(field: SettingField, raw: &str) -> Result<bool, SettingsError> {
    match raw.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(SettingsError::NotAFlag {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Pending settings edits, kept apart from the active configuration
///
/// Holds the last valid value of every field. A rejected edit leaves the
/// field untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDraft {
    values: SessionSettings,
}

impl Default for SettingsDraft {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

impl SettingsDraft {
    /// Start editing from the given settings.
    ///
    /// Invalid input settings are replaced by the defaults.
    pub fn new(from: SessionSettings) -> Self {
        let values = match from.validate() {
            Ok(()) => from,
            Err(e) => {
                tracing::warn!("Discarding invalid settings ({}), using defaults", e);
                SessionSettings::default()
            }
        };
        Self { values }
    }

    /// The settings as edited so far (always valid)
    pub fn settings(&self) -> SessionSettings {
        self.values
    }

    /// Set a field from raw user input
    pub fn set(&mut self, field: SettingField, raw: &str) -> Result<(), SettingsError> {
        match field {
            SettingField::FocusMinutes => self.values.focus_minutes = parse_count(field, raw)?,
            SettingField::ShortBreakMinutes => {
                self.values.short_break_minutes = parse_count(field, raw)?
            }
            SettingField::LongBreakMinutes => {
                self.values.long_break_minutes = parse_count(field, raw)?
            }
            SettingField::LongBreakInterval => {
                self.values.long_break_interval = parse_count(field, raw)?
            }
            SettingField::AutoStartBreaks => self.values.auto_start_breaks = parse_flag(field, raw)?,
            SettingField::AutoStartFocus => self.values.auto_start_focus = parse_flag(field, raw)?,
        }
        Ok(())
    }

    /// Set a field addressed by name (e.g. "focus", "long_break_interval")
    pub fn set_named(&mut self, name: &str, raw: &str) -> Result<SettingField, SettingsError> {
        let field =
            SettingField::from_str(name).ok_or_else(|| SettingsError::UnknownField(name.to_string()))?;
        self.set(field, raw)?;
        Ok(field)
    }
}
