//! Pomodoro phase state machine
//!
//! The timer is advanced one second at a time with `tick()`. When a phase
//! reaches zero it transitions immediately on that same tick:
//!
//! - Focus -> ShortBreak, or LongBreak when the completed-session count is a
//!   multiple of the long-break interval; `is_running = auto_start_breaks`
//! - ShortBreak / LongBreak -> Focus; `is_running = auto_start_focus`
//!
//! Reset, manual phase switches and settings changes never touch the
//! completed-session counter.

use toolsjet_core::format;

use crate::phase::Phase;
use crate::settings::{SessionSettings, SettingsDraft, SettingsError};

/// A phase that just ran out, and what replaced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseCompletion {
    pub finished: Phase,
    pub next: Phase,
    /// Counter value after the transition
    pub completed_focus_sessions: u32,
    /// Whether the next phase started counting on its own
    pub auto_started: bool,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is paused; nothing changed
    Idle,
    /// One second was counted off the current phase
    Counted,
    /// The current phase reached zero and the timer moved on
    Completed(PhaseCompletion),
}

/// Pomodoro timer state
#[derive(Debug, Clone, PartialEq)]
pub struct PomodoroTimer {
    settings: SessionSettings,
    phase: Phase,
    remaining_seconds: u32,
    is_running: bool,
    completed_focus_sessions: u32,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::fresh(SessionSettings::default())
    }
}

impl PomodoroTimer {
    /// Create a paused timer at the start of a focus session
    pub fn new(settings: SessionSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::fresh(settings))
    }

    fn fresh(settings: SessionSettings) -> Self {
        Self {
            settings,
            phase: Phase::Focus,
            remaining_seconds: settings.duration_seconds(Phase::Focus),
            is_running: false,
            completed_focus_sessions: 0,
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn completed_focus_sessions(&self) -> u32 {
        self.completed_focus_sessions
    }

    /// Configured length of the current phase
    pub fn phase_duration_seconds(&self) -> u32 {
        self.settings.duration_seconds(self.phase)
    }

    /// Advance the timer by one second
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running {
            return TickOutcome::Idle;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return TickOutcome::Counted;
        }

        TickOutcome::Completed(self.complete_phase())
    }

    fn complete_phase(&mut self) -> PhaseCompletion {
        let finished = self.phase;

        let (next, auto_start) = match finished {
            Phase::Focus => {
                self.completed_focus_sessions += 1;
                (
                    self.settings.break_after(self.completed_focus_sessions),
                    self.settings.auto_start_breaks,
                )
            }
            Phase::ShortBreak | Phase::LongBreak => (Phase::Focus, self.settings.auto_start_focus),
        };

        self.phase = next;
        self.remaining_seconds = self.settings.duration_seconds(next);
        self.is_running = auto_start;

        tracing::info!(
            finished = finished.as_str(),
            next = next.as_str(),
            completed = self.completed_focus_sessions,
            auto_start,
            "Phase complete"
        );

        PhaseCompletion {
            finished,
            next,
            completed_focus_sessions: self.completed_focus_sessions,
            auto_started: auto_start,
        }
    }

    /// Start counting down
    pub fn start(&mut self) {
        self.is_running = true;
    }

    /// Stop counting down, keeping the remaining time
    pub fn pause(&mut self) {
        self.is_running = false;
    }

    /// Flip between running and paused. Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        self.is_running = !self.is_running;
        self.is_running
    }

    /// Restore the current phase's full duration and stop
    pub fn reset(&mut self) {
        self.is_running = false;
        self.remaining_seconds = self.phase_duration_seconds();
    }

    /// Jump to a phase chosen by the user and stop
    pub fn switch_phase(&mut self, phase: Phase) {
        self.is_running = false;
        self.phase = phase;
        self.remaining_seconds = self.settings.duration_seconds(phase);
        tracing::debug!(phase = phase.as_str(), "Switched phase");
    }

    /// Replace the active settings.
    ///
    /// The countdown restarts from the new duration only when the current
    /// phase's duration changed. Saving settings that leave it as is (or only
    /// touch other phases) keeps the time already elapsed, rather than
    /// resetting on every apply. Running state is unaffected either way.
    pub fn apply_settings(&mut self, settings: SessionSettings) -> Result<(), SettingsError> {
        settings.validate()?;

        let old_duration = self.phase_duration_seconds();
        self.settings = settings;
        let new_duration = self.phase_duration_seconds();

        if new_duration != old_duration {
            self.remaining_seconds = new_duration;
        }
        tracing::debug!(?settings, "Applied settings");
        Ok(())
    }

    /// Apply the values held in a draft
    pub fn apply_draft(&mut self, draft: &SettingsDraft) -> Result<(), SettingsError> {
        self.apply_settings(draft.settings())
    }

    /// Elapsed share of the current phase, in [0, 1]
    pub fn progress_fraction(&self) -> f64 {
        let total = self.phase_duration_seconds();
        if total == 0 {
            return 1.0;
        }
        let elapsed = total.saturating_sub(self.remaining_seconds);
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// Progress as a percentage (0-100)
    pub fn progress_percent(&self) -> u32 {
        (self.progress_fraction() * 100.0).floor() as u32
    }

    /// Remaining time as MM:SS
    pub fn clock(&self) -> String {
        format::clock(self.remaining_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(focus: u32, short: u32, long: u32, interval: u32) -> SessionSettings {
        SessionSettings {
            focus_minutes: focus,
            short_break_minutes: short,
            long_break_minutes: long,
            long_break_interval: interval,
            ..SessionSettings::default()
        }
    }

    /// Tick until the current phase completes; panics if it never does
    fn run_to_zero(timer: &mut PomodoroTimer) -> PhaseCompletion {
        timer.start();
        let limit = timer.remaining_seconds();
        for _ in 0..limit {
            if let TickOutcome::Completed(done) = timer.tick() {
                return done;
            }
        }
        panic!("phase did not complete within {} ticks", limit);
    }

    #[test]
    fn test_initial_state() {
        let timer = PomodoroTimer::new(SessionSettings::default()).unwrap();
        assert_eq!(timer.phase(), Phase::Focus);
        assert_eq!(timer.remaining_seconds(), 25 * 60);
        assert!(!timer.is_running());
        assert_eq!(timer.completed_focus_sessions(), 0);
        assert_eq!(timer.clock(), "25:00");
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        assert!(PomodoroTimer::new(settings(0, 5, 15, 4)).is_err());
        assert!(PomodoroTimer::new(settings(25, 5, 15, 0)).is_err());
    }

    #[test]
    fn test_tick_while_paused_is_idle() {
        let mut timer = PomodoroTimer::default();
        assert_eq!(timer.tick(), TickOutcome::Idle);
        assert_eq!(timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_tick_counts_down() {
        let mut timer = PomodoroTimer::default();
        timer.start();
        assert_eq!(timer.tick(), TickOutcome::Counted);
        assert_eq!(timer.remaining_seconds(), 1499);
        assert_eq!(timer.clock(), "24:59");
    }

    #[test]
    fn test_full_focus_lands_in_break() {
        for (focus, short, long, interval) in [(25, 5, 15, 4), (1, 2, 3, 1), (2, 1, 7, 3), (50, 10, 30, 2)] {
            let config = settings(focus, short, long, interval);
            let mut timer = PomodoroTimer::new(config).unwrap();
            timer.start();

            let mut last = TickOutcome::Idle;
            for _ in 0..focus * 60 {
                last = timer.tick();
            }

            let expected = if timer.completed_focus_sessions() % interval == 0 {
                Phase::LongBreak
            } else {
                Phase::ShortBreak
            };
            assert!(matches!(last, TickOutcome::Completed(_)));
            assert_eq!(timer.phase(), expected);
            assert_eq!(timer.remaining_seconds(), config.duration_seconds(expected));
            assert_eq!(timer.completed_focus_sessions(), 1);
        }
    }

    #[test]
    fn test_counter_only_moves_on_focus_completion() {
        let mut timer = PomodoroTimer::new(settings(1, 1, 1, 4)).unwrap();

        let done = run_to_zero(&mut timer);
        assert_eq!(done.finished, Phase::Focus);
        assert_eq!(timer.completed_focus_sessions(), 1);

        let done = run_to_zero(&mut timer);
        assert_eq!(done.finished, Phase::ShortBreak);
        assert_eq!(done.next, Phase::Focus);
        assert_eq!(timer.completed_focus_sessions(), 1);

        timer.switch_phase(Phase::LongBreak);
        timer.switch_phase(Phase::Focus);
        assert_eq!(timer.completed_focus_sessions(), 1);

        run_to_zero(&mut timer);
        assert_eq!(timer.completed_focus_sessions(), 2);
    }

    #[test]
    fn test_long_break_every_fourth_session() {
        let mut timer = PomodoroTimer::new(settings(1, 1, 1, 4)).unwrap();
        let mut breaks = Vec::new();

        for _ in 0..8 {
            let done = run_to_zero(&mut timer);
            assert_eq!(done.finished, Phase::Focus);
            breaks.push(done.next);
            run_to_zero(&mut timer);
        }

        use Phase::{LongBreak as L, ShortBreak as S};
        assert_eq!(breaks, vec![S, S, S, L, S, S, S, L]);
        assert_eq!(timer.completed_focus_sessions(), 8);
    }

    #[test]
    fn test_end_to_end_default_cycle() {
        let mut timer = PomodoroTimer::new(settings(25, 5, 15, 4)).unwrap();
        let mut phases = vec![timer.phase()];

        for round in 1..=4 {
            run_to_zero(&mut timer);
            phases.push(timer.phase());
            assert_eq!(timer.completed_focus_sessions(), round);
            if round < 4 {
                run_to_zero(&mut timer);
                phases.push(timer.phase());
            }
        }

        use Phase::{Focus as F, LongBreak as L, ShortBreak as S};
        assert_eq!(phases, vec![F, S, F, S, F, S, F, L]);
        assert_eq!(timer.completed_focus_sessions(), 4);
        assert_eq!(timer.remaining_seconds(), 15 * 60);
    }

    #[test]
    fn test_auto_start_flags() {
        let mut config = settings(1, 1, 1, 4);
        config.auto_start_breaks = true;
        let mut timer = PomodoroTimer::new(config).unwrap();

        let done = run_to_zero(&mut timer);
        assert!(done.auto_started);
        assert!(timer.is_running());

        let done = run_to_zero(&mut timer);
        assert!(!done.auto_started);
        assert!(!timer.is_running());
        assert_eq!(timer.phase(), Phase::Focus);
    }

    #[test]
    fn test_reset_restores_current_phase() {
        let mut timer = PomodoroTimer::new(settings(25, 5, 15, 4)).unwrap();
        timer.switch_phase(Phase::ShortBreak);
        timer.start();
        for _ in 0..42 {
            timer.tick();
        }
        assert_eq!(timer.remaining_seconds(), 300 - 42);

        timer.reset();
        assert_eq!(timer.phase(), Phase::ShortBreak);
        assert_eq!(timer.remaining_seconds(), 300);
        assert!(!timer.is_running());

        // Reset on an untouched timer is a no-op apart from stopping it
        timer.start();
        timer.reset();
        assert_eq!(timer.remaining_seconds(), 300);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_toggle() {
        let mut timer = PomodoroTimer::default();
        assert!(timer.toggle());
        assert!(timer.is_running());
        assert!(!timer.toggle());
        assert!(!timer.is_running());
    }

    #[test]
    fn test_switch_phase_resets_and_stops() {
        let mut timer = PomodoroTimer::default();
        timer.start();
        timer.tick();
        timer.switch_phase(Phase::LongBreak);
        assert_eq!(timer.phase(), Phase::LongBreak);
        assert_eq!(timer.remaining_seconds(), 900);
        assert!(!timer.is_running());
        assert_eq!(timer.completed_focus_sessions(), 0);
    }

    #[test]
    fn test_new_focus_duration_waits_for_next_focus() {
        let mut timer = PomodoroTimer::new(settings(1, 5, 15, 4)).unwrap();
        run_to_zero(&mut timer);
        assert_eq!(timer.phase(), Phase::ShortBreak);

        timer.start();
        for _ in 0..30 {
            timer.tick();
        }
        assert_eq!(timer.remaining_seconds(), 270);

        timer.apply_settings(settings(40, 5, 15, 4)).unwrap();
        assert_eq!(timer.remaining_seconds(), 270);
        assert!(timer.is_running());

        run_to_zero(&mut timer);
        assert_eq!(timer.phase(), Phase::Focus);
        assert_eq!(timer.remaining_seconds(), 40 * 60);
    }

    #[test]
    fn test_apply_settings_recomputes_current_phase() {
        let mut timer = PomodoroTimer::default();
        timer.start();
        timer.tick();

        timer.apply_settings(settings(30, 5, 15, 4)).unwrap();
        assert_eq!(timer.remaining_seconds(), 30 * 60);
        assert!(timer.is_running());
    }

    #[test]
    fn test_reapplying_same_duration_keeps_countdown() {
        let mut timer = PomodoroTimer::default();
        timer.start();
        for _ in 0..90 {
            timer.tick();
        }

        timer.apply_settings(settings(25, 10, 20, 3)).unwrap();
        assert_eq!(timer.remaining_seconds(), 1500 - 90);
        assert_eq!(timer.settings().short_break_minutes, 10);
    }

    #[test]
    fn test_apply_invalid_settings_is_rejected() {
        let mut timer = PomodoroTimer::default();
        assert!(timer.apply_settings(settings(0, 5, 15, 4)).is_err());
        assert_eq!(timer.settings().focus_minutes, 25);
        assert_eq!(timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_apply_draft() {
        let mut timer = PomodoroTimer::default();
        let mut draft = SettingsDraft::new(*timer.settings());
        draft.set_named("focus", "10").unwrap();
        let _ = draft.set_named("focus", "oops");

        timer.apply_draft(&draft).unwrap();
        assert_eq!(timer.settings().focus_minutes, 10);
        assert_eq!(timer.remaining_seconds(), 600);
    }

    #[test]
    fn test_progress() {
        let mut timer = PomodoroTimer::new(settings(1, 5, 15, 4)).unwrap();
        assert_eq!(timer.progress_fraction(), 0.0);

        timer.start();
        for _ in 0..15 {
            timer.tick();
        }
        assert!((timer.progress_fraction() - 0.25).abs() < f64::EPSILON);
        assert_eq!(timer.progress_percent(), 25);

        for _ in 0..44 {
            timer.tick();
        }
        assert_eq!(timer.remaining_seconds(), 1);
        assert!(timer.progress_fraction() < 1.0);
    }
}
