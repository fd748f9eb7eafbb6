//! Deadline-based debouncing for the search input.
//!
//! Each keystroke reschedules the deadline; only the last schedule within
//! the delay window fires. The debouncer holds no timer thread; the host
//! polls it from the event-loop tick.

use std::time::{Duration, Instant};

/// Default quiet period before a scheduled task fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// A cancellable scheduled task with a fixed delay.
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Quiet period between the last schedule and firing.
    delay: Duration,
    /// Pending deadline, if a task is scheduled.
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule the task, cancelling any pending one.
    pub fn schedule(&mut self) {
        self.schedule_at(Instant::now());
    }

    /// Schedule relative to an explicit clock reading.
    pub fn schedule_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Cancel the pending task, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a task is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire the task if its deadline has passed.
    ///
    /// Returns true at most once per schedule; the pending state is cleared
    /// when it fires.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Poll against an explicit clock reading.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
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
    fn test_not_pending_initially() {
        let mut debouncer = Debouncer::default();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.poll_at(Instant::now()));
    }

    #[test]
    fn test_fires_after_delay() {
        let mut debouncer = Debouncer::new(Duration::from_millis(200));
        let start = Instant::now();
        debouncer.schedule_at(start);

        assert!(debouncer.is_pending());
        assert!(!debouncer.poll_at(start + Duration::from_millis(100)));
        assert!(debouncer.poll_at(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_fires_at_most_once_per_schedule() {
        let mut debouncer = Debouncer::new(Duration::from_millis(200));
        let start = Instant::now();
        debouncer.schedule_at(start);

        let later = start + Duration::from_millis(300);
        assert!(debouncer.poll_at(later));
        assert!(!debouncer.poll_at(later));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_reschedule_pushes_deadline_back() {
        let mut debouncer = Debouncer::new(Duration::from_millis(200));
        let start = Instant::now();
        debouncer.schedule_at(start);

        // A second keystroke 150ms in resets the quiet period
        let rescheduled = start + Duration::from_millis(150);
        debouncer.schedule_at(rescheduled);

        assert!(!debouncer.poll_at(start + Duration::from_millis(250)));
        assert!(debouncer.poll_at(rescheduled + Duration::from_millis(200)));
    }

    #[test]
    fn test_cancel_clears_pending() {
        let mut debouncer = Debouncer::new(Duration::from_millis(200));
        let start = Instant::now();
        debouncer.schedule_at(start);
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert!(!debouncer.poll_at(start + Duration::from_secs(1)));
    }
}
