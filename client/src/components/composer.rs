//! Message input form for the chat view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits go out over the chat push channel and are then persisted through
//! `POST /save-message/`. Keystrokes drive the outgoing typing indicator via
//! `TypingDebouncer`; typing frames are only sent while the chat channel is
//! connected.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::{PushCommand, PushSender, SaveMessageRequest};
use crate::state::chat::ChatState;
use crate::state::session::Session;
use crate::util::typing::{Keystroke, TypingDebouncer, TypingSignal};

pub const SAVE_FAILED_NOTICE: &str = "Message sent but could not be saved.";

/// Commands and HTTP body produced by one accepted submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitPlan {
    pub commands: Vec<PushCommand>,
    pub save: SaveMessageRequest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// Blank input; nothing happens.
    Empty,
    NoPeer,
    NotConnected,
}

impl SubmitError {
    /// Inline text for the composer, `None` when the submit is silently dropped.
    #[must_use]
    pub fn notice(self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::NoPeer => Some("No conversation selected."),
            Self::NotConnected => Some("Not connected. Your message was not sent."),
        }
    }
}

/// Validate a submit and claim the session start if it has not gone out yet.
///
/// # Errors
///
/// Returns [`SubmitError`] for blank input, a missing peer, or a closed
/// chat channel. `state` is untouched on error.
pub fn plan_submit(state: &mut ChatState, session: &Session, raw: &str) -> Result<SubmitPlan, SubmitError> {
    let message = raw.trim();
    if message.is_empty() {
        return Err(SubmitError::Empty);
    }
    let Some(peer) = session.peer() else {
        return Err(SubmitError::NoPeer);
    };
    if !state.connection_status.is_connected() {
        return Err(SubmitError::NotConnected);
    }

    let mut commands = Vec::with_capacity(2);
    if state.begin_session() {
        commands.push(PushCommand::StartChat { receiver: peer.to_owned() });
    }
    commands.push(PushCommand::ChatMessage {
        message: message.to_owned(),
        sender: session.current_user.clone(),
        receiver: peer.to_owned(),
    });

    Ok(SubmitPlan {
        commands,
        save: SaveMessageRequest { message: message.to_owned(), receiver: peer.to_owned() },
    })
}

/// Typing frame for `signal`, or `None` outside a conversation.
pub fn typing_command(session: &Session, signal: TypingSignal) -> Option<PushCommand> {
    let peer = session.peer()?;
    Some(PushCommand::typing(&session.current_user, peer, signal == TypingSignal::Started))
}

/// Feed a keystroke to `debouncer` only while the chat channel is up.
///
/// Disconnected keystrokes end any open burst without a signal, so the first
/// keystroke after reconnect starts a fresh one.
pub fn typing_keystroke(debouncer: &mut TypingDebouncer, connected: bool) -> Option<Keystroke> {
    if !connected {
        let _ = debouncer.flush();
        return None;
    }
    Some(debouncer.keystroke())
}

/// Chat input with send button.
#[component]
pub fn Composer() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = StoredValue::new(expect_context::<Session>());
    let sender = StoredValue::new(expect_context::<PushSender>());
    let config = expect_context::<ClientConfig>();

    let input = RwSignal::new(String::new());
    let debouncer = StoredValue::new(TypingDebouncer::new(config.typing_idle_ms));

    let send_typing = move |signal: TypingSignal| {
        if !chat.with_untracked(|c| c.connection_status.is_connected()) {
            return;
        }
        if let Some(cmd) = session.with_value(|s| typing_command(s, signal)) {
            sender.with_value(|tx| tx.send(&cmd));
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        input.set(event_target_value(&ev));

        let connected = chat.with_untracked(|c| c.connection_status.is_connected());
        let Some(stroke) = debouncer.try_update_value(|d| typing_keystroke(d, connected)).flatten() else {
            return;
        };
        if let Some(signal) = stroke.signal {
            send_typing(signal);
        }

        #[cfg(feature = "csr")]
        {
            let idle = std::time::Duration::from_millis(u64::from(debouncer.with_value(TypingDebouncer::idle_ms)));
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(idle).await;
                if let Some(Some(signal)) = debouncer.try_update_value(|d| d.quiet_elapsed(stroke.generation)) {
                    send_typing(signal);
                }
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw = input.get_untracked();
        let current = session.get_value();

        match chat.try_update(|c| plan_submit(c, &current, &raw)) {
            Some(Ok(plan)) => {
                sender.with_value(|tx| {
                    for cmd in &plan.commands {
                        tx.send(cmd);
                    }
                });
                if let Some(Some(signal)) = debouncer.try_update_value(TypingDebouncer::flush) {
                    send_typing(signal);
                }
                input.set(String::new());
                chat.update(|c| c.notice = None);
                persist_message(current.csrf_token, plan.save, chat);
            }
            Some(Err(err)) => {
                if let Some(text) = err.notice() {
                    chat.update(|c| c.notice = Some(text.to_owned()));
                }
            }
            None => {}
        }
    };

    view! {
        <form id="chat-form" class="flex flex-col gap-1" on:submit=on_submit>
            <div class="flex gap-2">
                <input
                    id="chat-message-input"
                    class="flex-1 border rounded-lg px-3 py-2"
                    type="text"
                    autocomplete="off"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    on:input=on_input
                />
                <button class="bg-indigo-600 text-white rounded-lg px-4 py-2" type="submit">
                    "Send"
                </button>
            </div>
            {move || {
                chat.with(|c| c.notice.clone())
                    .map(|text| view! { <div class="text-sm text-red-600">{text}</div> })
            }}
        </form>
    }
}

fn persist_message(csrf_token: String, save: SaveMessageRequest, chat: RwSignal<ChatState>) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::save_message(&csrf_token, &save.receiver, &save.message).await {
                leptos::logging::warn!("save-message failed: {e}");
                chat.update(|c| c.notice = Some(SAVE_FAILED_NOTICE.to_owned()));
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (csrf_token, save, chat);
    }
}
