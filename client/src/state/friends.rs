//! Friend-request list and "add friend" outcomes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Items are removed optimistically only after the server confirms the
//! decision; a failed call leaves the item in place with its error text.

#[cfg(test)]
#[path = "friends_test.rs"]
mod friends_test;

use std::collections::HashMap;

use serde::Deserialize;

/// An incoming friend request shown with accept/decline buttons.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FriendRequestItem {
    pub id: String,
    pub from_user: String,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl FriendRequestItem {
    pub fn new(id: impl Into<String>, from_user: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from_user: from_user.into(),
            pending: false,
            error: None,
        }
    }
}

/// Progress of an outgoing "add friend" click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddFriendStatus {
    Pending,
    Sent,
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct FriendRequestsState {
    pub incoming: Vec<FriendRequestItem>,
    pub outgoing: HashMap<String, AddFriendStatus>,
}

impl FriendRequestsState {
    pub fn new(incoming: Vec<FriendRequestItem>) -> Self {
        Self { incoming, outgoing: HashMap::new() }
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&FriendRequestItem> {
        self.incoming.iter().find(|item| item.id == id)
    }

    /// Mark `id` as in flight. Returns `false` if it is unknown or already pending.
    pub fn begin_decision(&mut self, id: &str) -> bool {
        match self.incoming.iter_mut().find(|item| item.id == id) {
            Some(item) if !item.pending => {
                item.pending = true;
                item.error = None;
                true
            }
            _ => false,
        }
    }

    /// Settle a decision: success removes exactly that item, failure annotates it.
    pub fn finish_decision(&mut self, id: &str, result: Result<(), String>) {
        match result {
            Ok(()) => self.incoming.retain(|item| item.id != id),
            Err(message) => {
                if let Some(item) = self.incoming.iter_mut().find(|item| item.id == id) {
                    item.pending = false;
                    item.error = Some(message);
                }
            }
        }
    }

    /// Mark an outgoing request as in flight. Returns `false` if one is
    /// already pending or was sent.
    pub fn begin_add(&mut self, username: &str) -> bool {
        if matches!(
            self.outgoing.get(username),
            Some(AddFriendStatus::Pending | AddFriendStatus::Sent)
        ) {
            return false;
        }
        self.outgoing.insert(username.to_owned(), AddFriendStatus::Pending);
        true
    }

    pub fn finish_add(&mut self, username: &str, result: Result<(), String>) {
        let status = match result {
            Ok(()) => AddFriendStatus::Sent,
            Err(message) => AddFriendStatus::Failed(message),
        };
        self.outgoing.insert(username.to_owned(), status);
    }

    #[must_use]
    pub fn add_status(&self, username: &str) -> Option<&AddFriendStatus> {
        self.outgoing.get(username)
    }
}
