//! HTTP endpoint paths and request/response bodies.
//!
//! Every request must carry the CSRF token under [`CSRF_HEADER`].

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const SAVE_MESSAGE_PATH: &str = "/save-message/";
pub const UNREAD_COUNTS_PATH: &str = "/get-unread-counts/";
pub const ADD_FRIEND_PATH: &str = "/add-friend/";

/// Unread message counts keyed by sender username.
pub type UnreadCounts = BTreeMap<String, u32>;

/// Body of `POST /save-message/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveMessageRequest {
    pub message: String,
    pub receiver: String,
}

/// `status` discriminator shared by the JSON action endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Response of `POST /save-message/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveMessageResponse {
    pub status: ResponseStatus,
    #[serde(default)]
    pub message_id: Option<i64>,
    /// Server timestamp in `%Y-%m-%d %H:%M:%S` form.
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /add-friend/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddFriendRequest {
    pub username: String,
}

/// Accept or decline an incoming friend request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FriendDecision {
    Accept,
    Decline,
}

impl FriendDecision {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Decline => "decline",
        }
    }

    /// Endpoint path for this decision.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Accept => "/friend-request/accept/",
            Self::Decline => "/friend-request/decline/",
        }
    }
}

/// Body of `POST /friend-request/{accept,decline}/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendDecisionRequest {
    pub request_id: String,
}

/// Generic `{status, error}` response of the friend-request endpoints.
///
/// A missing `status` is treated as success; the HTTP status code has
/// already been checked by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub status: Option<ResponseStatus>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ActionResponse {
    /// Collapse into a result carrying the server's error text on failure.
    ///
    /// # Errors
    ///
    /// Returns the server error message (or a generic one) when `status` is `error`.
    pub fn into_result(self) -> Result<(), String> {
        match self.status {
            Some(ResponseStatus::Error) => Err(self.error.unwrap_or_else(|| "request failed".to_owned())),
            Some(ResponseStatus::Success) | None => Ok(()),
        }
    }
}
