use std::time::{Duration, Instant};

/// One-shot timer chained by the loop effect.
///
/// At most one deadline is pending. Switching loop mode off does not cancel it:
/// the pending deadline still fires once and the effect then declines to re-arm.
#[derive(Debug, Clone)]
pub struct LoopTimer {
    interval: Duration,
    deadline: Option<Instant>,
    fired: u64,
}

impl LoopTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
            fired: 0,
        }
    }

    /// Effect run after every state change: arm when looping and idle
    pub fn sync(&mut self, looping: bool, now: Instant) -> bool {
        if looping && self.deadline.is_none() {
            self.deadline = Some(now + self.interval);
            return true;
        }
        false
    }

    /// Disarm and report true once the deadline has passed
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.fired += 1;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the pending deadline
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    pub fn fired(&self) -> u64 {
        self.fired
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
