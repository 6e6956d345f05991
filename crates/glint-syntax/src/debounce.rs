//! Re-highlight debouncing.
//!
//! ## Learning: State Machines Without Timers
//!
//! The scheduler never sleeps or spawns. [`Debouncer::notify`] tells the
//! host how long to wait, the host's event loop calls [`Debouncer::fire`]
//! when that time is up. Keeping timers out of the type makes it usable from
//! any loop (a GUI toolkit, `tokio`, or a plain `tick()`) and trivially
//! testable.

use std::time::Duration;

use tracing::trace;

/// Delay between the first edit of a burst and the re-highlight.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebounceState {
    #[default]
    Idle,
    Pending,
}

/// Coalesces edit notifications into one delayed pass.
#[derive(Debug, Clone)]
pub struct Debouncer {
    state: DebounceState,
    delay: Duration,
    snapshot: Option<String>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: DebounceState::Idle,
            delay,
            snapshot: None,
        }
    }

    /// Records an edit. Returns the delay to schedule a callback after, or
    /// `None` when a callback is already pending.
    pub fn notify(&mut self) -> Option<Duration> {
        match self.state {
            DebounceState::Idle => {
                self.state = DebounceState::Pending;
                Some(self.delay)
            }
            DebounceState::Pending => {
                trace!("Coalescing edit into pending pass");
                None
            }
        }
    }

    /// The scheduled callback. Returns to `Idle` and reports whether `current`
    /// differs from the last highlighted text.
    pub fn fire(&mut self, current: &str) -> bool {
        self.state = DebounceState::Idle;
        self.snapshot.as_deref() != Some(current)
    }

    /// Stores the text a pass just highlighted.
    pub fn record(&mut self, text: String) {
        self.snapshot = Some(text);
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == DebounceState::Pending
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_coalesce() {
        let mut debouncer = Debouncer::default();
        assert_eq!(debouncer.state(), DebounceState::Idle);
        assert_eq!(debouncer.notify(), Some(Duration::from_millis(50)));
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.notify(), None);
        assert_eq!(debouncer.notify(), None);
    }

    #[test]
    fn test_fire_compares_snapshot() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        debouncer.notify();
        assert!(debouncer.fire("a = 1"));
        assert_eq!(debouncer.state(), DebounceState::Idle);

        debouncer.record("a = 1".to_string());
        debouncer.notify();
        assert!(!debouncer.fire("a = 1"));
        assert_eq!(debouncer.state(), DebounceState::Idle);

        debouncer.notify();
        assert!(debouncer.fire("a = 2"));
    }

    #[test]
    fn test_notify_after_fire_schedules_again() {
        let mut debouncer = Debouncer::default();
        debouncer.notify();
        debouncer.fire("");
        assert!(debouncer.notify().is_some());
    }
}
