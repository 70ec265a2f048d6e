//! Presence and unread counters for the user directory.
//!
//! SYSTEM CONTEXT
//! ==============
//! Seeded once from `GET /get-unread-counts/`, then kept current by the
//! status push channel for as long as the page is open. Last write wins.

#[cfg(test)]
#[path = "presence_test.rs"]
mod presence_test;

use std::collections::HashMap;

use crate::state::connection::ConnectionStatus;
use crate::util::badge::unread_badge_label;
use wire::http::UnreadCounts;
use wire::{UnreadUpdate, UserPresence};

#[derive(Clone, Debug, Default)]
pub struct PresenceState {
    pub connection_status: ConnectionStatus,
    /// Online flag per username. Users never reported are absent.
    pub online: HashMap<String, bool>,
    /// Unread message count per sender username.
    pub unread: HashMap<String, u32>,
    /// Whether the HTTP snapshot has been applied.
    pub unread_loaded: bool,
}

impl PresenceState {
    pub fn apply_presence(&mut self, rows: Vec<UserPresence>) {
        for row in rows {
            self.online.insert(row.username, row.is_online);
        }
    }

    #[must_use]
    pub fn is_online(&self, username: &str) -> Option<bool> {
        self.online.get(username).copied()
    }

    /// Apply the one-time HTTP snapshot on top of whatever pushes already arrived.
    pub fn seed_unread(&mut self, counts: UnreadCounts) {
        self.unread.extend(counts);
        self.unread_loaded = true;
    }

    /// Apply a push. An explicit count overwrites; a bare push increments.
    pub fn apply_unread(&mut self, update: UnreadUpdate) {
        match update.count {
            Some(count) => {
                self.unread.insert(update.username, count);
            }
            None => {
                let entry = self.unread.entry(update.username).or_insert(0);
                *entry = entry.saturating_add(1);
            }
        }
    }

    pub fn clear_unread(&mut self, username: &str) {
        self.unread.remove(username);
    }

    #[must_use]
    pub fn unread_count(&self, username: &str) -> u32 {
        self.unread.get(username).copied().unwrap_or(0)
    }

    /// Badge text for `username`, or `None` when the badge is hidden.
    #[must_use]
    pub fn unread_badge(&self, username: &str) -> Option<String> {
        unread_badge_label(self.unread_count(username))
    }
}
