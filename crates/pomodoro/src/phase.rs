//! Timer phases

use serde::{Deserialize, Serialize};

/// The activity the timer is currently counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Work session, counted toward the long-break interval when it completes
    Focus,
    /// Break after most focus sessions
    ShortBreak,
    /// Break after every `long_break_interval`-th focus session
    LongBreak,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Focus, Phase::ShortBreak, Phase::LongBreak];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Focus => "focus",
            Phase::ShortBreak => "short_break",
            Phase::LongBreak => "long_break",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Focus => "Focus",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "focus" | "pomodoro" | "work" | "f" => Some(Phase::Focus),
            "short_break" | "short" | "shortbreak" | "s" => Some(Phase::ShortBreak),
            "long_break" | "long" | "longbreak" | "l" => Some(Phase::LongBreak),
            _ => None,
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, Phase::Focus)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Focus
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
