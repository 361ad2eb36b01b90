//! Leading+trailing coalescing for refreshes driven by continuous input.
//!
//! The first call in an idle period fires immediately. Calls that arrive
//! while the window is open are folded into a single trailing fire, which
//! happens once `wait` has passed since the last call.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct Debouncer {
    wait: Duration,
    last_call: Option<Instant>,
    pending: bool,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            last_call: None,
            pending: false,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Register a call; returns true when the caller should run now.
    pub fn call(&mut self) -> bool {
        self.call_at(Instant::now())
    }

    pub fn call_at(&mut self, now: Instant) -> bool {
        let idle = self.is_idle_at(now);
        self.last_call = Some(now);
        if idle {
            self.pending = false;
            return true;
        }
        self.pending = true;
        false
    }

    /// Poll for the trailing edge; returns true when a coalesced run is due.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_call else {
            return false;
        };
        if now.saturating_duration_since(last) < self.wait {
            return false;
        }
        self.last_call = None;
        std::mem::take(&mut self.pending)
    }

    /// Remaining time until a pending trailing run is due.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        if !self.pending {
            return None;
        }
        let last = self.last_call?;
        Some(self.wait.saturating_sub(now.saturating_duration_since(last)))
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    fn is_idle_at(&self, now: Instant) -> bool {
        self.last_call
            .is_none_or(|last| now.saturating_duration_since(last) >= self.wait)
    }
}
