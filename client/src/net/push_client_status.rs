//! Status-channel event handlers extracted from `push_client`.

#[cfg(test)]
#[path = "push_client_status_test.rs"]
mod push_client_status_test;

#[cfg(any(test, feature = "csr"))]
use crate::net::types::PushEvent;
#[cfg(any(test, feature = "csr"))]
use crate::state::presence::PresenceState;

/// Apply a presence or unread event. Returns `false` for anything else.
#[cfg(any(test, feature = "csr"))]
pub(super) fn apply_status_event(state: &mut PresenceState, event: &PushEvent) -> bool {
    match event {
        PushEvent::Presence(rows) => {
            state.apply_presence(rows.clone());
            true
        }
        PushEvent::UnreadUpdate(update) => {
            state.apply_unread(update.clone());
            true
        }
        _ => false,
    }
}

#[cfg(feature = "csr")]
pub(super) fn handle_status_event(presence: leptos::prelude::RwSignal<PresenceState>, event: &PushEvent) {
    use leptos::prelude::Update;

    presence.update(|p| {
        apply_status_event(p, event);
    });
}
