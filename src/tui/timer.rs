use std::time::{Duration, Instant};

use super::app::PendingClear;

/// One-shot status clears waiting for their deadline
#[derive(Debug, Default)]
pub struct StatusTimers {
    entries: Vec<(Instant, u64)>,
}

impl StatusTimers {
    pub fn schedule(&mut self, now: Instant, clear: PendingClear) {
        self.entries.push((now + clear.delay, clear.generation));
    }

    /// How long the loop may block: until the earliest deadline, capped at `idle`
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        self.entries
            .iter()
            .map(|(due, _)| due.saturating_duration_since(now))
            .min()
            .map_or(idle, |d| d.min(idle))
    }

    /// Remove and return the generations whose deadline has passed, oldest first
    pub fn take_due(&mut self, now: Instant) -> Vec<u64> {
        let mut due: Vec<(Instant, u64)> = Vec::new();
        self.entries.retain(|&(deadline, generation)| {
            if deadline <= now {
                due.push((deadline, generation));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(deadline, _)| deadline);
        due.into_iter().map(|(_, generation)| generation).collect()
    }
}
