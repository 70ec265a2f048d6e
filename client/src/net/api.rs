//! JSON HTTP calls to the messaging backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, each carrying the CSRF
//! token header. Native builds get stubs returning `ApiError::Transport` so
//! the pure helpers below stay testable.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers log the error and show
//! [`ApiError::user_message`] inline; nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use super::types::{ActionResponse, ResponseStatus};
use super::types::{FriendDecision, SaveMessageResponse, UnreadCounts};

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Failure of an HTTP call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx response without a usable error body.
    #[error("server returned status {0}")]
    Status(u16),
    /// The server answered with `{"status": "error", "error": ...}`.
    #[error("server rejected request: {0}")]
    Rejected(String),
    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown next to the control that triggered the call.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Transport(_) | Self::Status(_) | Self::Decode(_) => GENERIC_FAILURE.to_owned(),
        }
    }
}

/// Turn a non-2xx response into an error, preferring the server's own text.
#[cfg(any(test, feature = "csr"))]
fn classify_failure(status: u16, body: Option<ActionResponse>) -> ApiError {
    match body.and_then(|b| b.error) {
        Some(message) if !message.trim().is_empty() => ApiError::Rejected(message),
        _ => ApiError::Status(status),
    }
}

/// Map a decoded save response to the caller's result.
#[cfg(any(test, feature = "csr"))]
fn check_save_response(body: SaveMessageResponse) -> Result<SaveMessageResponse, ApiError> {
    match body.status {
        ResponseStatus::Success => Ok(body),
        ResponseStatus::Error => Err(ApiError::Rejected(
            body.error.unwrap_or_else(|| "request failed".to_owned()),
        )),
    }
}

#[cfg(feature = "csr")]
async fn post_action<B: serde::Serialize>(csrf_token: &str, path: &str, body: &B) -> Result<(), ApiError> {
    use wire::http::CSRF_HEADER;

    let resp = gloo_net::http::Request::post(path)
        .header(CSRF_HEADER, csrf_token)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        return Err(classify_failure(status, resp.json::<ActionResponse>().await.ok()));
    }
    // Some endpoints answer with an empty 200; treat that as success.
    let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(());
    }
    let parsed: ActionResponse = serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))?;
    parsed.into_result().map_err(ApiError::Rejected)
}

/// Persist a chat message via `POST /save-message/`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, an
/// `error` status body, or an undecodable response.
pub async fn save_message(csrf_token: &str, receiver: &str, message: &str) -> Result<SaveMessageResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        use wire::http::{CSRF_HEADER, SAVE_MESSAGE_PATH, SaveMessageRequest};

        let payload = SaveMessageRequest { message: message.to_owned(), receiver: receiver.to_owned() };
        let resp = gloo_net::http::Request::post(SAVE_MESSAGE_PATH)
            .header(CSRF_HEADER, csrf_token)
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            return Err(classify_failure(status, resp.json::<ActionResponse>().await.ok()));
        }
        let body: SaveMessageResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        check_save_response(body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (csrf_token, receiver, message);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// Fetch the unread snapshot from `GET /get-unread-counts/`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn fetch_unread_counts(csrf_token: &str) -> Result<UnreadCounts, ApiError> {
    #[cfg(feature = "csr")]
    {
        use wire::http::{CSRF_HEADER, UNREAD_COUNTS_PATH};

        let resp = gloo_net::http::Request::get(UNREAD_COUNTS_PATH)
            .header(CSRF_HEADER, csrf_token)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<UnreadCounts>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = csrf_token;
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// Send a friend request to `username` via `POST /add-friend/`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the server rejects it.
pub async fn send_friend_request(csrf_token: &str, username: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        use wire::http::{ADD_FRIEND_PATH, AddFriendRequest};

        let payload = AddFriendRequest { username: username.to_owned() };
        post_action(csrf_token, ADD_FRIEND_PATH, &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (csrf_token, username);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

/// Accept or decline the incoming request `request_id`.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or the server rejects it.
pub async fn decide_friend_request(csrf_token: &str, request_id: &str, decision: FriendDecision) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        use wire::http::FriendDecisionRequest;

        let payload = FriendDecisionRequest { request_id: request_id.to_owned() };
        post_action(csrf_token, decision.path(), &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (csrf_token, request_id, decision);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}
