//! Push-channel events (server to client) and commands (client to server).
//!
//! DESIGN
//! ======
//! Inbound frames are discriminated by a `type` string, but the backend also
//! emits bare `{message, sender}` broadcasts with no `type` at all. Decoding
//! therefore goes through `serde_json::Value` and dispatches by hand instead
//! of relying on a serde-tagged enum. Outbound commands are fully owned by
//! this crate and use a plain internally-tagged enum.

#[cfg(test)]
#[path = "push_test.rs"]
mod push_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{CodecError, pick_bool, pick_str};

/// A decoded inbound push-channel event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PushEvent {
    /// Handshake acknowledgement carrying the server's view of our identity.
    Init { username: Option<String> },
    /// A chat message broadcast to the room.
    ChatMessage(ChatMessagePayload),
    /// A peer started or stopped typing.
    Typing(TypingUpdate),
    /// Online/offline status for one or more users.
    Presence(Vec<UserPresence>),
    /// Unread counter change for messages from one sender.
    UnreadUpdate(UnreadUpdate),
    /// An event kind this client does not handle.
    Unknown { kind: String },
}

/// Chat message fields shared by the typed and untyped broadcast shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessagePayload {
    pub message: String,
    pub sender: String,
    pub receiver: Option<String>,
    /// Raw timestamp as sent by the server (RFC 3339, `Y-m-d H:M:S`, or epoch ms).
    pub timestamp: Option<String>,
}

/// Typing state change for a peer.
///
/// `sender` is `None` for a bare `stopped_typing`, which clears every peer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingUpdate {
    pub sender: Option<String>,
    pub is_typing: bool,
}

/// Online flag for one user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPresence {
    pub username: String,
    #[serde(default)]
    pub is_online: bool,
}

/// Unread counter change. A missing `count` means "one more".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnreadUpdate {
    pub username: String,
    pub count: Option<u32>,
}

/// Decode one push-channel text frame.
///
/// # Errors
///
/// Returns [`CodecError::Json`] for malformed JSON, and
/// [`CodecError::MissingField`]/[`CodecError::InvalidField`] when a known
/// event kind lacks a field its handler needs.
pub fn decode_event(text: &str) -> Result<PushEvent, CodecError> {
    let value: Value = serde_json::from_str(text)?;
    event_from_value(&value)
}

/// Decode an already-parsed push payload.
///
/// # Errors
///
/// See [`decode_event`].
pub fn event_from_value(value: &Value) -> Result<PushEvent, CodecError> {
    if !value.is_object() {
        return Err(CodecError::InvalidField { field: "payload", expected: "object" });
    }

    let kind = match value.get("type") {
        None | Some(Value::Null) => None,
        Some(Value::String(kind)) => Some(kind.as_str()),
        Some(_) => return Err(CodecError::InvalidField { field: "type", expected: "string" }),
    };

    match kind {
        None | Some("chat_message" | "message") => parse_chat_message(value).map(PushEvent::ChatMessage),
        Some("init") => Ok(PushEvent::Init { username: pick_str(value, &["username"]).map(str::to_owned) }),
        Some("typing_indicator") => {
            let sender = pick_str(value, &["sender", "username"]).ok_or(CodecError::MissingField("sender"))?;
            let is_typing = pick_bool(value, &["is_typing"]).ok_or(CodecError::MissingField("is_typing"))?;
            Ok(PushEvent::Typing(TypingUpdate { sender: Some(sender.to_owned()), is_typing }))
        }
        Some("typing") => {
            let sender = pick_str(value, &["username", "sender"]).ok_or(CodecError::MissingField("username"))?;
            let is_typing = pick_bool(value, &["is_typing"]).unwrap_or(true);
            Ok(PushEvent::Typing(TypingUpdate { sender: Some(sender.to_owned()), is_typing }))
        }
        Some("stopped_typing") => Ok(PushEvent::Typing(TypingUpdate {
            sender: pick_str(value, &["username", "sender"]).map(str::to_owned),
            is_typing: false,
        })),
        Some("user_list") => parse_user_list(value).map(PushEvent::Presence),
        Some("user_status") => parse_user_status(value).map(|p| PushEvent::Presence(vec![p])),
        Some("unread_message_update") => parse_unread_update(value).map(PushEvent::UnreadUpdate),
        Some(other) => Ok(PushEvent::Unknown { kind: other.to_owned() }),
    }
}

fn parse_chat_message(value: &Value) -> Result<ChatMessagePayload, CodecError> {
    let message = pick_str(value, &["message", "content"]).ok_or(CodecError::MissingField("message"))?;
    let sender = pick_str(value, &["sender", "username"]).ok_or(CodecError::MissingField("sender"))?;
    let receiver = pick_str(value, &["receiver"]).map(str::to_owned);
    let timestamp = match value.get("timestamp") {
        Some(Value::String(ts)) => Some(ts.clone()),
        Some(Value::Number(ts)) => Some(ts.to_string()),
        _ => None,
    };
    Ok(ChatMessagePayload {
        message: message.to_owned(),
        sender: sender.to_owned(),
        receiver,
        timestamp,
    })
}

fn parse_user_list(value: &Value) -> Result<Vec<UserPresence>, CodecError> {
    let rows = value
        .get("users")
        .ok_or(CodecError::MissingField("users"))?
        .as_array()
        .ok_or(CodecError::InvalidField { field: "users", expected: "array" })?;

    // Rows without a username are skipped; the rest of the snapshot still applies.
    Ok(rows
        .iter()
        .filter_map(|row| serde_json::from_value::<UserPresence>(row.clone()).ok())
        .collect())
}

fn parse_user_status(value: &Value) -> Result<UserPresence, CodecError> {
    let username = pick_str(value, &["user", "username"]).ok_or(CodecError::MissingField("user"))?;
    let is_online = match pick_str(value, &["status"]) {
        Some("online") => true,
        Some("offline") => false,
        Some(_) => return Err(CodecError::InvalidField { field: "status", expected: "online/offline status" }),
        None => pick_bool(value, &["is_online"]).ok_or(CodecError::MissingField("status"))?,
    };
    Ok(UserPresence { username: username.to_owned(), is_online })
}

fn parse_unread_update(value: &Value) -> Result<UnreadUpdate, CodecError> {
    let username = pick_str(value, &["sender", "username", "user"]).ok_or(CodecError::MissingField("sender"))?;
    let count = match value.get("count") {
        None | Some(Value::Null) => None,
        Some(raw) => Some(
            raw.as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or(CodecError::InvalidField { field: "count", expected: "unsigned count" })?,
        ),
    };
    Ok(UnreadUpdate { username: username.to_owned(), count })
}

/// An outbound push-channel command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PushCommand {
    /// Open the private conversation with `receiver`; sent once per page session.
    StartChat { receiver: String },
    /// A chat message for the room.
    ChatMessage {
        message: String,
        sender: String,
        receiver: String,
    },
    /// The local user started typing.
    Typing {
        is_typing: bool,
        username: String,
        receiver: String,
    },
    /// The local user went quiet.
    StoppedTyping {
        is_typing: bool,
        username: String,
        receiver: String,
    },
}

impl PushCommand {
    /// Build the typing-state command matching `is_typing`.
    #[must_use]
    pub fn typing(username: &str, receiver: &str, is_typing: bool) -> Self {
        let username = username.to_owned();
        let receiver = receiver.to_owned();
        if is_typing {
            Self::Typing { is_typing, username, receiver }
        } else {
            Self::StoppedTyping { is_typing, username, receiver }
        }
    }
}

/// Encode a command as a JSON text frame.
#[must_use]
pub fn encode_command(command: &PushCommand) -> String {
    // Serializing string-only variants cannot fail.
    serde_json::to_string(command).unwrap_or_default()
}
