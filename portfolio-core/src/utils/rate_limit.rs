//! Rate limiting for high-frequency events
//!
//! Excess events are dropped, never queued: a handler that runs always reads
//! the page as it is at that moment. A throttle remembers that something was
//! dropped so the owner can run one trailing pass once the window closes.

use std::time::{Duration, Instant};

/// Throttle with a leading pass and at most one trailing pass per interval
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
    dropped: bool,
}

impl Throttle {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
            dropped: false,
        }
    }

    /// Whether the handler may run now; a `true` opens a new window
    pub fn ready(&mut self, now: Instant) -> bool {
        if self.in_window(now) {
            self.dropped = true;
            return false;
        }
        self.last = Some(now);
        self.dropped = false;
        true
    }

    /// Whether a dropped event is owed a pass now that the window has closed
    ///
    /// Fires at most once per dropped burst and opens a new window.
    pub fn trailing(&mut self, now: Instant) -> bool {
        if !self.dropped || self.in_window(now) {
            return false;
        }
        self.last = Some(now);
        self.dropped = false;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.dropped
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.dropped = false;
    }

    fn in_window(&self, now: Instant) -> bool {
        self.last
            .is_some_and(|last| now.saturating_duration_since(last) < self.interval)
    }
}

/// Trailing-edge debounce: fires once the events have been quiet for the interval
#[derive(Debug, Clone)]
pub struct Debounce {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Record an event, pushing the deadline out
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Whether the quiet period has elapsed; fires at most once per burst
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
