//! Shared JSON wire contracts for the chat push channel and HTTP endpoints.
//!
//! This crate owns the representation of every payload exchanged with the
//! messaging backend. The backend owns the contract, so field names here
//! match it exactly; decoding is lenient about which of the historical
//! aliases a payload uses and strict about the fields a handler needs.


pub mod http;
pub mod push;

pub use push::{ChatMessagePayload, PushCommand, PushEvent, TypingUpdate, UnreadUpdate, UserPresence};
pub use push::{decode_event, encode_command};

/// Error returned by [`decode_event`] and the other payload decoders.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw text is not valid JSON.
    #[error("failed to decode push payload: {0}")]
    Json(#[from] serde_json::Error),
    /// A field the event kind requires is absent.
    #[error("push payload is missing field `{0}`")]
    MissingField(&'static str),
    /// A field is present but has the wrong shape.
    #[error("push payload field `{field}` is not a valid {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

/// Return the first string value found under any of `keys`.
pub(crate) fn pick_str<'a>(payload: &'a serde_json::Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| payload.get(*key).and_then(serde_json::Value::as_str))
}

/// Return the first boolean value found under any of `keys`.
pub(crate) fn pick_bool(payload: &serde_json::Value, keys: &[&str]) -> Option<bool> {
    keys.iter()
        .find_map(|key| payload.get(*key).and_then(serde_json::Value::as_bool))
}
