//! Fixed-delay reconnect schedule for push connections.
//!
//! No backoff, no cap, no jitter: every close arms exactly one retry after
//! the same delay, forever.

#[cfg(test)]
#[path = "reconnect_test.rs"]
mod reconnect_test;

use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ReconnectSchedule {
    delay_ms: u32,
    armed: bool,
    attempts: u64,
}

impl ReconnectSchedule {
    #[must_use]
    pub fn fixed(delay_ms: u32) -> Self {
        Self { delay_ms, armed: false, attempts: 0 }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.delay_ms))
    }

    /// The socket closed. Returns the delay to wait if this close arms a
    /// retry, or `None` when a retry is already armed.
    pub fn on_close(&mut self) -> Option<Duration> {
        if self.armed {
            return None;
        }
        self.armed = true;
        Some(self.delay())
    }

    /// The armed retry fired. Returns the attempt number, or `None` if
    /// nothing was armed.
    pub fn on_retry(&mut self) -> Option<u64> {
        if !self.armed {
            return None;
        }
        self.armed = false;
        self.attempts += 1;
        Some(self.attempts)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    #[must_use]
    pub fn attempts(&self) -> u64 {
        self.attempts
    }
}
