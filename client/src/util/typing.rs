//! Keystroke debounce for the outgoing typing indicator.
//!
//! DESIGN
//! ======
//! The debouncer owns no timers. Each keystroke hands back a generation
//! token; the caller sleeps for [`TypingDebouncer::idle_ms`] and reports the
//! token back through [`TypingDebouncer::quiet_elapsed`]. Only the token of
//! the most recent keystroke can end the burst, so stale timers are no-ops.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Edge of a typing burst that should be sent to the peer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingSignal {
    Started,
    Stopped,
}

/// Outcome of a keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keystroke {
    /// `Some(Started)` for the first keystroke of a burst.
    pub signal: Option<TypingSignal>,
    /// Token to hand back when the quiet timer for this keystroke fires.
    pub generation: u64,
}

#[derive(Clone, Debug)]
pub struct TypingDebouncer {
    idle_ms: u32,
    active: bool,
    generation: u64,
}

impl TypingDebouncer {
    #[must_use]
    pub fn new(idle_ms: u32) -> Self {
        Self { idle_ms, active: false, generation: 0 }
    }

    #[must_use]
    pub fn idle_ms(&self) -> u32 {
        self.idle_ms
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn keystroke(&mut self) -> Keystroke {
        self.generation = self.generation.wrapping_add(1);
        let signal = if self.active {
            None
        } else {
            self.active = true;
            Some(TypingSignal::Started)
        };
        Keystroke { signal, generation: self.generation }
    }

    /// The quiet timer armed for `generation` fired.
    pub fn quiet_elapsed(&mut self, generation: u64) -> Option<TypingSignal> {
        if !self.active || generation != self.generation {
            return None;
        }
        self.active = false;
        Some(TypingSignal::Stopped)
    }

    /// End the burst immediately, e.g. because the message was sent.
    /// Pending quiet timers become no-ops.
    pub fn flush(&mut self) -> Option<TypingSignal> {
        self.generation = self.generation.wrapping_add(1);
        if !self.active {
            return None;
        }
        self.active = false;
        Some(TypingSignal::Stopped)
    }
}
