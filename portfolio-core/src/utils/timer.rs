//! Single-owner scheduled continuation

use std::time::{Duration, Instant};

/// One pending deadline, owned by the controller that scheduled it
///
/// Scheduling again replaces the pending deadline, so only the most recently
/// scheduled continuation can ever fire.
#[derive(Debug, Clone, Default)]
pub struct TimerSlot {
    deadline: Option<Instant>,
}

impl TimerSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline if it has passed
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_when_due() {
        let t0 = Instant::now();
        let mut slot = TimerSlot::new();
        slot.schedule(t0, Duration::from_secs(3));

        assert!(!slot.fire_if_due(t0 + Duration::from_secs(2)));
        assert!(slot.fire_if_due(t0 + Duration::from_secs(3)));
        assert!(!slot.fire_if_due(t0 + Duration::from_secs(4)));
    }

    #[test]
    fn rescheduling_supersedes_previous_deadline() {
        let t0 = Instant::now();
        let mut slot = TimerSlot::new();
        slot.schedule(t0, Duration::from_secs(3));
        slot.schedule(t0 + Duration::from_secs(2), Duration::from_secs(3));

        // 旧的截止时间已失效
        assert!(!slot.fire_if_due(t0 + Duration::from_secs(3)));
        assert!(slot.fire_if_due(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let t0 = Instant::now();
        let mut slot = TimerSlot::new();
        slot.schedule(t0, Duration::from_millis(10));
        slot.cancel();

        assert!(!slot.is_pending());
        assert!(!slot.fire_if_due(t0 + Duration::from_secs(1)));
    }
}
