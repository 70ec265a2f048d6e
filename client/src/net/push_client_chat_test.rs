use super::*;
use crate::net::types::ChatMessagePayload;

fn session() -> Session {
    Session::new("ann", "tok").with_peer("bob")
}

fn typing(sender: Option<&str>, is_typing: bool) -> PushEvent {
    PushEvent::Typing(TypingUpdate { sender: sender.map(str::to_owned), is_typing })
}

fn message(sender: &str, text: &str) -> PushEvent {
    PushEvent::ChatMessage(ChatMessagePayload {
        message: text.to_owned(),
        sender: sender.to_owned(),
        receiver: Some("ann".to_owned()),
        timestamp: None,
    })
}

#[test]
fn chat_message_is_appended_with_ownership() {
    let mut state = ChatState::default();
    assert_eq!(apply_chat_event(&mut state, &message("bob", "hi"), &session(), 10.0, 3000), ChatOutcome::Applied);
    assert_eq!(apply_chat_event(&mut state, &message("ann", "yo"), &session(), 11.0, 3000), ChatOutcome::Applied);

    assert_eq!(state.messages.len(), 2);
    assert!(!state.messages[0].is_own);
    assert!(state.messages[1].is_own);
    assert_eq!(state.messages[0].received_at_ms, 10.0);
}

#[test]
fn peer_typing_arms_indicator_until_ttl() {
    let mut state = ChatState::default();
    let outcome = apply_chat_event(&mut state, &typing(Some("bob"), true), &session(), 100.0, 3000);
    assert_eq!(outcome, ChatOutcome::TypingArmed);
    assert_eq!(state.typing_peer(), Some("bob"));

    assert!(!state.expire_typing(3099.0));
    assert!(state.expire_typing(3100.0));
    assert_eq!(state.typing_peer(), None);
}

#[test]
fn peer_stopped_typing_clears_indicator() {
    let mut state = ChatState::default();
    apply_chat_event(&mut state, &typing(Some("bob"), true), &session(), 0.0, 3000);
    assert_eq!(apply_chat_event(&mut state, &typing(Some("bob"), false), &session(), 1.0, 3000), ChatOutcome::Applied);
    assert_eq!(state.typing_peer(), None);
}

#[test]
fn anonymous_stop_clears_every_peer() {
    let mut state = ChatState::default();
    apply_chat_event(&mut state, &typing(Some("bob"), true), &session(), 0.0, 3000);
    apply_chat_event(&mut state, &typing(Some("cid"), true), &session(), 0.0, 3000);
    apply_chat_event(&mut state, &typing(None, false), &session(), 1.0, 3000);
    assert!(state.remote_typing.is_empty());
}

#[test]
fn own_typing_echo_is_ignored() {
    let mut state = ChatState::default();
    assert_eq!(apply_chat_event(&mut state, &typing(Some("ann"), true), &session(), 0.0, 3000), ChatOutcome::Ignored);
    assert!(state.remote_typing.is_empty());
}

#[test]
fn message_from_typing_peer_hides_indicator() {
    let mut state = ChatState::default();
    apply_chat_event(&mut state, &typing(Some("bob"), true), &session(), 0.0, 3000);
    apply_chat_event(&mut state, &message("bob", "done"), &session(), 1.0, 3000);
    assert_eq!(state.typing_peer(), None);
}

#[test]
fn status_events_are_ignored() {
    let mut state = ChatState::default();
    let outcome = apply_chat_event(&mut state, &PushEvent::Presence(vec![]), &session(), 0.0, 3000);
    assert_eq!(outcome, ChatOutcome::Ignored);
    assert!(state.messages.is_empty());
}
