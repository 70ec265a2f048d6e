//! Chat-channel event handlers extracted from `push_client`.

#[cfg(test)]
#[path = "push_client_chat_test.rs"]
mod push_client_chat_test;

#[cfg(any(test, feature = "csr"))]
use crate::net::types::{PushEvent, TypingUpdate};
#[cfg(any(test, feature = "csr"))]
use crate::state::chat::{ChatMessage, ChatState};
#[cfg(any(test, feature = "csr"))]
use crate::state::session::Session;

/// What applying an event did to the chat state.
#[cfg(any(test, feature = "csr"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ChatOutcome {
    Ignored,
    Applied,
    /// A peer started typing; the caller must schedule an expiry check.
    TypingArmed,
}

#[cfg(any(test, feature = "csr"))]
pub(super) fn apply_chat_event(
    state: &mut ChatState,
    event: &PushEvent,
    session: &Session,
    now_ms: f64,
    ttl_ms: u32,
) -> ChatOutcome {
    match event {
        PushEvent::ChatMessage(payload) => {
            state.push_message(ChatMessage::from_payload(payload.clone(), session, now_ms));
            ChatOutcome::Applied
        }
        PushEvent::Typing(update) => apply_typing(state, update, session, now_ms, ttl_ms),
        _ => ChatOutcome::Ignored,
    }
}

#[cfg(any(test, feature = "csr"))]
fn apply_typing(state: &mut ChatState, update: &TypingUpdate, session: &Session, now_ms: f64, ttl_ms: u32) -> ChatOutcome {
    match (update.sender.as_deref(), update.is_typing) {
        // Our own typing echoes back on the shared room.
        (Some(sender), _) if session.is_self(sender) => ChatOutcome::Ignored,
        (Some(sender), true) => {
            state.set_typing(sender, true, now_ms, f64::from(ttl_ms));
            ChatOutcome::TypingArmed
        }
        (Some(sender), false) => {
            state.set_typing(sender, false, now_ms, 0.0);
            ChatOutcome::Applied
        }
        (None, false) => {
            state.clear_all_typing();
            ChatOutcome::Applied
        }
        (None, true) => ChatOutcome::Ignored,
    }
}

#[cfg(feature = "csr")]
pub(super) fn handle_chat_event(
    chat: leptos::prelude::RwSignal<ChatState>,
    session: &Session,
    event: &PushEvent,
    ttl_ms: u32,
) {
    use leptos::prelude::Update;

    let now = crate::util::page::now_ms();
    let outcome = chat.try_update(|c| apply_chat_event(c, event, session, now, ttl_ms));

    if outcome == Some(ChatOutcome::TypingArmed) {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ttl_ms))).await;
            let now = crate::util::page::now_ms();
            chat.update(|c| {
                c.expire_typing(now);
            });
        });
    }
}
