//! Client configuration with page-level overrides.
//!
//! Defaults match the backend's routing. A page may override any field
//! through a `<meta name=... content=...>` tag; the lookup is injected so the
//! parsing rules are testable without a document.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CHAT_WS_PATH: &str = "/ws/chat/";
pub const DEFAULT_STATUS_WS_PATH: &str = "/ws/chat/";
pub const DEFAULT_RECONNECT_DELAY_MS: u32 = 5_000;
pub const DEFAULT_TYPING_IDLE_MS: u32 = 1_000;
pub const DEFAULT_REMOTE_TYPING_TTL_MS: u32 = 3_000;

/// Error returned by [`ClientConfig::from_meta`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be greater than zero")]
    ZeroDelay { name: &'static str },
    #[error("{name} must be an absolute path, got {value:?}")]
    RelativePath { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Socket path for messages and typing.
    pub chat_ws_path: String,
    /// Socket path for presence and unread updates.
    pub status_ws_path: String,
    /// Fixed wait between a socket close and the next connect attempt.
    pub reconnect_delay_ms: u32,
    /// Quiet interval after the last keystroke before "stopped typing" is sent.
    pub typing_idle_ms: u32,
    /// How long a peer's typing indicator stays up without a refresh.
    pub remote_typing_ttl_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chat_ws_path: DEFAULT_CHAT_WS_PATH.to_owned(),
            status_ws_path: DEFAULT_STATUS_WS_PATH.to_owned(),
            reconnect_delay_ms: DEFAULT_RECONNECT_DELAY_MS,
            typing_idle_ms: DEFAULT_TYPING_IDLE_MS,
            remote_typing_ttl_ms: DEFAULT_REMOTE_TYPING_TTL_MS,
        }
    }
}

impl ClientConfig {
    /// Build config from page meta tags.
    ///
    /// Optional:
    /// - `chat-ws-path`: default `/ws/chat/`
    /// - `status-ws-path`: default `/ws/chat/`
    /// - `chat-reconnect-ms`: default 5000
    /// - `chat-typing-idle-ms`: default 1000
    /// - `chat-typing-ttl-ms`: default 3000
    ///
    /// Unparseable numbers fall back to their default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for zero delays or paths not starting with `/`.
    pub fn from_meta<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            chat_ws_path: parse_path("chat-ws-path", lookup("chat-ws-path"), DEFAULT_CHAT_WS_PATH)?,
            status_ws_path: parse_path("status-ws-path", lookup("status-ws-path"), DEFAULT_STATUS_WS_PATH)?,
            reconnect_delay_ms: parse_millis(
                "chat-reconnect-ms",
                lookup("chat-reconnect-ms"),
                DEFAULT_RECONNECT_DELAY_MS,
            )?,
            typing_idle_ms: parse_millis("chat-typing-idle-ms", lookup("chat-typing-idle-ms"), DEFAULT_TYPING_IDLE_MS)?,
            remote_typing_ttl_ms: parse_millis(
                "chat-typing-ttl-ms",
                lookup("chat-typing-ttl-ms"),
                DEFAULT_REMOTE_TYPING_TTL_MS,
            )?,
        })
    }

    /// Build config from the current document's meta tags.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_meta`].
    pub fn from_page() -> Result<Self, ConfigError> {
        Self::from_meta(crate::util::page::meta_content)
    }
}

fn parse_millis(name: &'static str, raw: Option<String>, default: u32) -> Result<u32, ConfigError> {
    let value = raw
        .as_deref()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default);
    if value == 0 {
        return Err(ConfigError::ZeroDelay { name });
    }
    Ok(value)
}

fn parse_path(name: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    let Some(value) = raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) else {
        return Ok(default.to_owned());
    };
    if !value.starts_with('/') {
        return Err(ConfigError::RelativePath { name, value });
    }
    Ok(value)
}
