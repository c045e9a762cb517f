//! Fixed-period deadline timer for the frame-driven event loop.
//!
//! egui has no `after(ms, callback)`; instead every frame polls its tickers
//! and asks for a repaint at the earliest pending deadline.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    /// First deadline is one `period` after `start`.
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next_due: start + period,
        }
    }

    /// Returns `true` at most once per call when the deadline has passed.
    ///
    /// Deadlines advance by whole periods so they do not drift with frame
    /// latency. After a stall longer than one period the schedule restarts
    /// from `now` instead of firing a burst of catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.period;
        if self.next_due <= now {
            self.next_due = now + self.period;
        }
        true
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }
}
