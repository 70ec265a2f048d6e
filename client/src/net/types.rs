//! Wire types used by the client plus the outbound push handle.
//!
//! The schema itself lives in the `wire` crate so it can be tested without a
//! browser; this module only adds the channel plumbing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use futures::channel::mpsc::UnboundedSender;

pub use wire::http::{
    ActionResponse, FriendDecision, ResponseStatus, SaveMessageRequest, SaveMessageResponse, UnreadCounts,
};
pub use wire::{ChatMessagePayload, PushCommand, PushEvent, TypingUpdate, UnreadUpdate, UserPresence};

/// Handle for queueing outbound push frames.
///
/// Frames are buffered in the channel until a connection is open, so a
/// command queued during a reconnect is delivered once the socket is back.
#[derive(Clone, Debug)]
pub struct PushSender {
    tx: UnboundedSender<String>,
}

impl PushSender {
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self { tx }
    }

    /// Encode and queue `command`. Returns `false` once the client loop is gone.
    pub fn send(&self, command: &PushCommand) -> bool {
        self.tx.unbounded_send(wire::encode_command(command)).is_ok()
    }
}
