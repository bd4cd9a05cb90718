//! Real-time driver for the pomodoro timer
//!
//! A `Ticker` is a cancellable tokio task that ticks the shared timer once per
//! period. `PomodoroRunner` owns the timer and at most one ticker: it arms a
//! ticker when the timer starts running and cancels it on pause, reset,
//! manual phase switch and drop. A ticker stops by itself when a phase
//! completes and the next phase was not auto-started.

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::phase::Phase;
use crate::settings::{SessionSettings, SettingsError};
use crate::timer::{PhaseCompletion, PomodoroTimer, TickOutcome};

/// Timer shared between the runner and its ticker
pub type SharedTimer = Arc<Mutex<PomodoroTimer>>;

fn lock(timer: &SharedTimer) -> MutexGuard<'_, PomodoroTimer> {
    timer.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sound played when a phase completes
pub trait Chime: Send + Sync {
    fn play(&self);
}

/// Rings the terminal bell
pub struct BellChime;

impl Chime for BellChime {
    fn play(&self) {
        let mut stdout = std::io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

/// No sound
pub struct SilentChime;

impl Chime for SilentChime {
    fn play(&self) {}
}

/// A running one-second countdown task
pub struct Ticker {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a ticker on the current tokio runtime
    pub fn spawn(
        timer: SharedTimer,
        chime: Arc<dyn Chime>,
        events: mpsc::UnboundedSender<PhaseCompletion>,
        period: Duration,
    ) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            tracing::debug!("Ticker armed");
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = tokio::time::sleep(period) => {}
                }

                let outcome = {
                    let mut timer = lock(&timer);
                    // A pause may have landed while we were waking up
                    if token.is_cancelled() {
                        break;
                    }
                    timer.tick()
                };

                match outcome {
                    TickOutcome::Idle => break,
                    TickOutcome::Counted => {}
                    TickOutcome::Completed(done) => {
                        chime.play();
                        let _ = events.send(done);
                        if !done.auto_started {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("Ticker stopped");
        });

        Self { cancel, handle }
    }

    /// Stop ticking. The task exits at its next await point.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Owns a pomodoro timer and keeps exactly one ticker alive while it runs
pub struct PomodoroRunner {
    timer: SharedTimer,
    ticker: Option<Ticker>,
    chime: Arc<dyn Chime>,
    events: mpsc::UnboundedSender<PhaseCompletion>,
    period: Duration,
}

impl PomodoroRunner {
    /// Create a paused runner. Completions are delivered on the returned channel.
    pub fn new(
        settings: SessionSettings,
        chime: Arc<dyn Chime>,
    ) -> Result<(Self, mpsc::UnboundedReceiver<PhaseCompletion>), SettingsError> {
        let timer = PomodoroTimer::new(settings)?;
        let (events, rx) = mpsc::unbounded_channel();

        let runner = Self {
            timer: Arc::new(Mutex::new(timer)),
            ticker: None,
            chime,
            events,
            period: Duration::from_secs(1),
        };
        Ok((runner, rx))
    }

    /// Use a tick period other than one second
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Copy of the current timer state
    pub fn snapshot(&self) -> PomodoroTimer {
        lock(&self.timer).clone()
    }

    /// Whether a ticker task is currently alive
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn start(&mut self) {
        {
            let mut timer = lock(&self.timer);
            if timer.is_running() && self.is_ticking() {
                return;
            }
            timer.start();
        }
        self.arm();
    }

    pub fn pause(&mut self) {
        self.disarm();
        lock(&self.timer).pause();
    }

    /// Start or pause. Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        let running = lock(&self.timer).is_running();
        if running {
            self.pause();
        } else {
            self.start();
        }
        !running
    }

    pub fn reset(&mut self) {
        self.disarm();
        lock(&self.timer).reset();
    }

    pub fn switch_phase(&mut self, phase: Phase) {
        self.disarm();
        lock(&self.timer).switch_phase(phase);
    }

    /// Apply new settings; the ticker keeps running if it was
    pub fn apply_settings(&mut self, settings: SessionSettings) -> Result<(), SettingsError> {
        lock(&self.timer).apply_settings(settings)
    }

    fn arm(&mut self) {
        self.disarm();
        self.ticker = Some(Ticker::spawn(
            Arc::clone(&self.timer),
            Arc::clone(&self.chime),
            self.events.clone(),
            self.period,
        ));
    }

    fn disarm(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}

impl Drop for PomodoroRunner {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::sleep;

    #[derive(Default)]
    struct CountingChime(AtomicU32);

    impl Chime for CountingChime {
        fn play(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn one_minute_settings() -> SessionSettings {
        SessionSettings {
            focus_minutes: 1,
            short_break_minutes: 1,
            long_break_minutes: 2,
            ..SessionSettings::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_started_runner_counts_down() {
        let (mut runner, _rx) =
            PomodoroRunner::new(one_minute_settings(), Arc::new(SilentChime)).unwrap();
        runner.start();

        sleep(Duration::from_millis(10_500)).await;
        let state = runner.snapshot();
        assert_eq!(state.remaining_seconds(), 50);
        assert!(state.is_running());
        assert!(runner.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_chimes_and_stops() {
        let chime = Arc::new(CountingChime::default());
        let (mut runner, mut rx) = PomodoroRunner::new(one_minute_settings(), chime.clone()).unwrap();
        runner.start();

        sleep(Duration::from_millis(60_500)).await;

        let done = rx.try_recv().expect("completion event");
        assert_eq!(done.finished, Phase::Focus);
        assert_eq!(done.next, Phase::ShortBreak);
        assert_eq!(done.completed_focus_sessions, 1);
        assert!(rx.try_recv().is_err());
        assert_eq!(chime.0.load(Ordering::SeqCst), 1);

        let state = runner.snapshot();
        assert_eq!(state.phase(), Phase::ShortBreak);
        assert_eq!(state.remaining_seconds(), 60);
        assert!(!state.is_running());

        // Nothing moves while stopped
        sleep(Duration::from_secs(30)).await;
        assert_eq!(runner.snapshot().remaining_seconds(), 60);
        assert!(!runner.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_cancels_ticker() {
        let (mut runner, _rx) =
            PomodoroRunner::new(one_minute_settings(), Arc::new(SilentChime)).unwrap();
        runner.start();
        sleep(Duration::from_millis(5_500)).await;

        runner.pause();
        sleep(Duration::from_secs(20)).await;

        let state = runner.snapshot();
        assert_eq!(state.remaining_seconds(), 55);
        assert!(!state.is_running());
        assert!(!runner.is_ticking());

        assert!(runner.toggle());
        sleep(Duration::from_millis(5_500)).await;
        assert_eq!(runner.snapshot().remaining_seconds(), 50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_start_keeps_one_ticker() {
        let (mut runner, _rx) =
            PomodoroRunner::new(one_minute_settings(), Arc::new(SilentChime)).unwrap();
        runner.start();
        runner.start();
        runner.start();

        sleep(Duration::from_millis(3_500)).await;
        assert_eq!(runner.snapshot().remaining_seconds(), 57);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_start_keeps_ticking_into_break() {
        let settings = SessionSettings {
            auto_start_breaks: true,
            ..one_minute_settings()
        };
        let (mut runner, mut rx) = PomodoroRunner::new(settings, Arc::new(SilentChime)).unwrap();
        runner.start();

        sleep(Duration::from_millis(65_500)).await;

        let done = rx.try_recv().unwrap();
        assert!(done.auto_started);
        let state = runner.snapshot();
        assert_eq!(state.phase(), Phase::ShortBreak);
        assert_eq!(state.remaining_seconds(), 55);
        assert!(state.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_switch_and_reset_stop_the_ticker() {
        let (mut runner, _rx) =
            PomodoroRunner::new(one_minute_settings(), Arc::new(SilentChime)).unwrap();
        runner.start();
        sleep(Duration::from_millis(2_500)).await;

        runner.switch_phase(Phase::LongBreak);
        sleep(Duration::from_secs(5)).await;
        let state = runner.snapshot();
        assert_eq!(state.phase(), Phase::LongBreak);
        assert_eq!(state.remaining_seconds(), 120);

        runner.start();
        sleep(Duration::from_millis(2_500)).await;
        runner.reset();
        sleep(Duration::from_secs(5)).await;
        assert_eq!(runner.snapshot().remaining_seconds(), 120);
        assert!(!runner.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_apply_settings_while_running() {
        let (mut runner, _rx) =
            PomodoroRunner::new(one_minute_settings(), Arc::new(SilentChime)).unwrap();
        runner.start();
        sleep(Duration::from_millis(2_500)).await;

        let longer = SessionSettings {
            focus_minutes: 2,
            ..one_minute_settings()
        };
        runner.apply_settings(longer).unwrap();
        sleep(Duration::from_secs(1)).await;

        let state = runner.snapshot();
        assert!(state.is_running());
        assert_eq!(state.remaining_seconds(), 119);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_runner_stops_ticking() {
        let (mut runner, _rx) =
            PomodoroRunner::new(one_minute_settings(), Arc::new(SilentChime)).unwrap();
        let timer = Arc::clone(&runner.timer);
        runner.start();
        sleep(Duration::from_millis(1_500)).await;
        drop(runner);

        sleep(Duration::from_secs(10)).await;
        assert_eq!(lock(&timer).remaining_seconds(), 59);
    }
}
