//! WebSocket push client for the chat backend.
//!
//! A `PushChannel` owns one socket and the state it feeds. The chat page runs
//! two of them (chat and status); the user directory runs only the status
//! channel. Each channel reconnects on its own after a fixed delay, forever.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "csr")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Socket and decode failures are logged and never surface to the UI beyond
//! the connection status. The only recovery is the reconnect timer.

#[path = "push_client_chat.rs"]
mod push_client_chat;
#[path = "push_client_link.rs"]
mod push_client_link;
#[path = "push_client_status.rs"]
mod push_client_status;

#[cfg(test)]
#[path = "push_client_test.rs"]
mod push_client_test;

use leptos::prelude::RwSignal;

#[cfg(feature = "csr")]
use self::push_client_chat::handle_chat_event;
#[cfg(feature = "csr")]
use self::push_client_link::{Transport, run_push_loop};
#[cfg(feature = "csr")]
use self::push_client_status::handle_status_event;
#[cfg(feature = "csr")]
use crate::net::types::PushSender;
#[cfg(feature = "csr")]
use crate::state::connection::ConnectionStatus;
use crate::net::types::PushEvent;
use crate::state::chat::ChatState;
use crate::state::presence::PresenceState;
use crate::state::session::Session;

/// Which half of the protocol a connection is responsible for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    /// Messages and typing.
    Chat,
    /// Presence and unread counters.
    Status,
}

impl ChannelKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Status => "status",
        }
    }

    /// Whether a connection of this kind acts on `event`.
    ///
    /// Both channels may share one endpoint and so see every event; each
    /// applies only its own kinds and ignores the rest silently.
    #[must_use]
    pub fn handles(self, event: &PushEvent) -> bool {
        match (self, event) {
            (Self::Chat, PushEvent::ChatMessage(_) | PushEvent::Typing(_))
            | (Self::Status, PushEvent::Presence(_) | PushEvent::UnreadUpdate(_)) => true,
            _ => false,
        }
    }
}

/// A push connection together with the state it writes.
#[derive(Clone)]
pub enum PushChannel {
    Chat {
        chat: RwSignal<ChatState>,
        session: Session,
        remote_typing_ttl_ms: u32,
    },
    Status {
        presence: RwSignal<PresenceState>,
    },
}

impl PushChannel {
    #[must_use]
    pub fn kind(&self) -> ChannelKind {
        match self {
            Self::Chat { .. } => ChannelKind::Chat,
            Self::Status { .. } => ChannelKind::Status,
        }
    }

    #[cfg(feature = "csr")]
    fn set_status(&self, status: ConnectionStatus) {
        use leptos::prelude::Update;

        match self {
            Self::Chat { chat, .. } => chat.update(|c| {
                if status.is_connected() {
                    c.on_connected();
                } else {
                    c.connection_status = status;
                }
            }),
            Self::Status { presence } => presence.update(|p| p.connection_status = status),
        }
    }
}

/// Spawn the connection loop for `channel` and return its outbound handle.
///
/// `path` is resolved against the page location (`ws:` or `wss:`).
#[cfg(feature = "csr")]
pub fn spawn_push_client(channel: PushChannel, path: &str, reconnect_delay_ms: u32) -> PushSender {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    let tx_clone = tx.clone();
    let url = crate::util::page::socket_url(path);

    leptos::task::spawn_local(push_client_loop(channel, url, reconnect_delay_ms, tx_clone, rx));

    PushSender::new(tx)
}

/// Main connection loop with fixed-delay reconnect.
///
/// `_tx` keeps the command queue open for the life of the loop, whether or
/// not the caller holds on to its `PushSender`.
#[cfg(feature = "csr")]
async fn push_client_loop(
    channel: PushChannel,
    url: String,
    reconnect_delay_ms: u32,
    _tx: futures::channel::mpsc::UnboundedSender<String>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use crate::util::reconnect::ReconnectSchedule;

    let name = channel.kind().name();
    let mut schedule = ReconnectSchedule::fixed(reconnect_delay_ms);
    let mut transport = BrowserTransport { channel, url };

    run_push_loop(&mut transport, name, &mut schedule, &mut rx).await;
}

/// Websocket transport bound to one channel's state.
#[cfg(feature = "csr")]
struct BrowserTransport {
    channel: PushChannel,
    url: String,
}

#[cfg(feature = "csr")]
impl Transport for BrowserTransport {
    type Error = String;
    type Inbound = futures::stream::LocalBoxStream<'static, Result<String, String>>;
    type Outbound = std::pin::Pin<Box<dyn futures::Sink<String, Error = gloo_net::websocket::WebSocketError>>>;

    async fn connect(&mut self) -> Option<Result<(Self::Inbound, Self::Outbound), String>> {
        use futures::future::ready;
        use futures::{SinkExt, StreamExt};
        use gloo_net::websocket::futures::WebSocket;
        use gloo_net::websocket::{Message, WebSocketError};

        let ws = match WebSocket::open(&self.url) {
            Ok(ws) => ws,
            Err(e) => return Some(Err(e.to_string())),
        };
        leptos::logging::log!("[{}] socket open: {}", self.channel.kind().name(), self.url);
        let (ws_write, ws_read) = ws.split();

        let inbound = ws_read
            .filter_map(|msg| {
                ready(match msg {
                    Ok(Message::Text(text)) => Some(Ok(text)),
                    Ok(Message::Bytes(_)) => None,
                    Err(e) => Some(Err(e.to_string())),
                })
            })
            .boxed_local();
        let outbound: Self::Outbound =
            Box::pin(ws_write.with(|text: String| ready(Ok::<_, WebSocketError>(Message::Text(text)))));

        Some(Ok((inbound, outbound)))
    }

    async fn sleep(&mut self, delay: std::time::Duration) {
        gloo_timers::future::sleep(delay).await;
    }

    fn on_status(&mut self, status: ConnectionStatus) {
        self.channel.set_status(status);
    }

    fn on_text(&mut self, text: String) {
        match wire::decode_event(&text) {
            Ok(event) => dispatch_event(&self.channel, event),
            Err(e) => leptos::logging::warn!("[{}] dropping frame: {e}", self.channel.kind().name()),
        }
    }
}

/// Route a decoded event to the channel's handler.
#[cfg(feature = "csr")]
fn dispatch_event(channel: &PushChannel, event: PushEvent) {
    let kind = channel.kind();
    match &event {
        PushEvent::Init { username } => {
            leptos::logging::log!("[{}] session init for {}", kind.name(), username.as_deref().unwrap_or("?"));
            return;
        }
        PushEvent::Unknown { kind: event_kind } => {
            leptos::logging::log!("[{}] ignoring event type {event_kind:?}", kind.name());
            return;
        }
        _ => {}
    }
    if !kind.handles(&event) {
        return;
    }

    match channel {
        PushChannel::Chat { chat, session, remote_typing_ttl_ms } => {
            handle_chat_event(*chat, session, &event, *remote_typing_ttl_ms);
        }
        PushChannel::Status { presence } => handle_status_event(*presence, &event),
    }
}
