//! State for the private chat view: messages, remote typing, session start.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the chat push channel (`net::push_client_chat`) and the
//! composer; read by the message list and typing indicator components.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::HashMap;

use crate::state::connection::ConnectionStatus;
use crate::state::session::Session;
use wire::ChatMessagePayload;

/// State for the chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub connection_status: ConnectionStatus,
    /// Messages in arrival order. Append-only for the lifetime of the page.
    pub messages: Vec<ChatMessage>,
    /// Peers currently typing, mapped to the time their indicator expires.
    pub remote_typing: HashMap<String, f64>,
    /// Whether `start_chat` went out on the current connection.
    pub has_started_chat: bool,
    /// Inline error shown under the composer.
    pub notice: Option<String>,
}

/// A single rendered chat message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub sender: String,
    pub receiver: Option<String>,
    pub body: String,
    /// Server timestamp, if the push carried one.
    pub timestamp: Option<String>,
    /// Local arrival time in epoch milliseconds; shown when `timestamp` is absent.
    pub received_at_ms: f64,
    pub is_own: bool,
}

impl ChatMessage {
    pub fn from_payload(payload: ChatMessagePayload, session: &Session, received_at_ms: f64) -> Self {
        let is_own = session.is_self(&payload.sender);
        Self {
            sender: payload.sender,
            receiver: payload.receiver,
            body: payload.message,
            timestamp: payload.timestamp,
            received_at_ms,
            is_own,
        }
    }
}

impl ChatState {
    /// Record a fresh connection. The server forgets `start_chat` with the
    /// old socket, so it has to be sent again.
    pub fn on_connected(&mut self) {
        self.connection_status = ConnectionStatus::Connected;
        self.has_started_chat = false;
    }

    /// Append a message. The sender can no longer be typing it.
    pub fn push_message(&mut self, msg: ChatMessage) {
        self.remote_typing.remove(&msg.sender);
        self.messages.push(msg);
    }

    /// Mark `peer` as typing until `now_ms + ttl_ms`, or clear it.
    pub fn set_typing(&mut self, peer: &str, is_typing: bool, now_ms: f64, ttl_ms: f64) {
        if is_typing {
            self.remote_typing.insert(peer.to_owned(), now_ms + ttl_ms);
        } else {
            self.remote_typing.remove(peer);
        }
    }

    pub fn clear_all_typing(&mut self) {
        self.remote_typing.clear();
    }

    /// Drop typing entries whose deadline has passed. Returns `true` if any were removed.
    pub fn expire_typing(&mut self, now_ms: f64) -> bool {
        let before = self.remote_typing.len();
        self.remote_typing.retain(|_, expires_at| *expires_at > now_ms);
        self.remote_typing.len() != before
    }

    /// The peer to show in the typing indicator, if any.
    ///
    /// A private chat has at most one peer; ties are broken by name so the
    /// indicator does not flicker between renders.
    #[must_use]
    pub fn typing_peer(&self) -> Option<&str> {
        self.remote_typing.keys().map(String::as_str).min()
    }

    /// Claim the session start. Returns `true` exactly once per connection.
    pub fn begin_session(&mut self) -> bool {
        if self.has_started_chat {
            return false;
        }
        self.has_started_chat = true;
        true
    }
}
