//! Deadline-based trailing-edge debounce
//!
//! Time is passed in by the caller, so the debouncer never sleeps and can be
//! driven by any event loop (or by tests with synthetic instants).

use std::time::{Duration, Instant};

/// Delay between the last CSS edit and the parse it triggers
pub const DEFAULT_PARSE_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Holds at most one pending value; scheduling again replaces it
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value and restart the delay window at `now`
    ///
    /// Returns the new deadline.
    pub fn schedule(&mut self, value: T, now: Instant) -> Instant {
        let deadline = now + self.delay;
        self.pending = Some(Pending { value, deadline });
        deadline
    }

    /// Drop the pending value, if any
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Take the pending value once its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.deadline().is_some_and(|deadline| now >= deadline) {
            self.cancel()
        } else {
            None
        }
    }

    /// Take the pending value regardless of its deadline
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PARSE_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn value_is_due_at_deadline() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        assert_eq!(debouncer.schedule("a", now), now + DELAY);

        assert_eq!(debouncer.poll(now + DELAY - Duration::from_millis(1)), None);
        assert_eq!(debouncer.poll(now + DELAY), Some("a"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(now + DELAY * 2), None);
    }

    #[test]
    fn rescheduling_restarts_the_window() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(1, now);
        debouncer.schedule(2, now + Duration::from_millis(400));

        assert_eq!(debouncer.poll(now + DELAY), None);
        assert_eq!(
            debouncer.deadline(),
            Some(now + Duration::from_millis(400) + DELAY)
        );
        assert_eq!(debouncer.poll(now + Duration::from_millis(900)), Some(2));
    }

    #[test]
    fn cancel_discards_the_pending_value() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("x", now);
        assert_eq!(debouncer.cancel(), Some("x"));
        assert_eq!(debouncer.deadline(), None);
        assert_eq!(debouncer.poll(now + DELAY), None);
    }

    #[test]
    fn flush_ignores_the_deadline() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("x", now);
        assert_eq!(debouncer.flush(), Some("x"));
        assert_eq!(debouncer.flush(), None);
    }
}
