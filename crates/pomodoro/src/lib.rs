//! pomodoro - Focus sessions with short and long breaks
//!
//! The timer cycles Focus -> break -> Focus forever. Every completed focus
//! session is counted, and each `long_break_interval`-th one is followed by a
//! long break instead of a short one.
//!
//! - `settings`: session durations, the long-break interval, auto-start flags
//!   and the pending edit buffer that validates user input
//! - `timer`: the phase state machine, driven one tick (second) at a time
//! - `runner`: the cancellable one-second ticker and completion chime
//! - `store`: persisted settings

pub mod phase;
pub mod runner;
pub mod settings;
pub mod store;
pub mod timer;

pub use phase::Phase;
pub use runner::{BellChime, Chime, PomodoroRunner, SilentChime, Ticker};
pub use settings::{SessionSettings, SettingField, SettingsDraft, SettingsError};
pub use store::SettingsStore;
pub use timer::{PhaseCompletion, PomodoroTimer, TickOutcome};
