//! Cancel-and-replace debouncing
//!
//! Each call aborts whatever call is still waiting and schedules the new one
//! after the delay, so only the last call of a burst runs.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Default delay between the last input and recomputation
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `action` after the delay unless another call comes first.
    /// Must be called inside a tokio runtime.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Drop the waiting call, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                tracing::trace!("Debounced call replaced");
            }
            handle.abort();
        }
    }

    /// Whether a call is still waiting to run
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::time::sleep;

    fn recorder() -> (Arc<Mutex<Vec<u32>>>, impl Fn(u32) -> Box<dyn FnOnce() + Send>) {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        let make = move |n: u32| -> Box<dyn FnOnce() + Send> {
            let sink = Arc::clone(&sink);
            Box::new(move || sink.lock().unwrap().push(n))
        };
        (fired, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_last_call_fires() {
        let (fired, make) = recorder();
        let mut debouncer = Debouncer::from_millis(300);

        debouncer.call(make(1));
        sleep(Duration::from_millis(100)).await;
        debouncer.call(make(2));
        sleep(Duration::from_millis(100)).await;
        debouncer.call(make(3));
        assert!(debouncer.is_pending());

        sleep(Duration::from_millis(299)).await;
        assert!(fired.lock().unwrap().is_empty());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(*fired.lock().unwrap(), vec![3]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_calls_all_fire() {
        let (fired, make) = recorder();
        let mut debouncer = Debouncer::from_millis(50);

        debouncer.call(make(1));
        sleep(Duration::from_millis(60)).await;
        debouncer.call(make(2));
        sleep(Duration::from_millis(60)).await;

        assert_eq!(*fired.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (fired, make) = recorder();
        let mut debouncer = Debouncer::default();
        debouncer.call(make(1));
        drop(debouncer);

        sleep(Duration::from_secs(1)).await;
        assert!(fired.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let (fired, make) = recorder();
        let mut debouncer = Debouncer::default();
        debouncer.call(make(1));
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        sleep(Duration::from_secs(1)).await;
        assert!(fired.lock().unwrap().is_empty());
    }
}
