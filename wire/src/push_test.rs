use super::*;

fn decode(value: serde_json::Value) -> PushEvent {
    decode_event(&value.to_string()).expect("event should decode")
}

// =============================================================
// Chat messages
// =============================================================

#[test]
fn decode_typed_chat_message_keeps_all_fields() {
    let event = decode(serde_json::json!({
        "type": "chat_message",
        "message": "hi",
        "sender": "ann",
        "receiver": "bob",
        "timestamp": "2024-05-01T10:15:00Z"
    }));
    assert_eq!(
        event,
        PushEvent::ChatMessage(ChatMessagePayload {
            message: "hi".to_owned(),
            sender: "ann".to_owned(),
            receiver: Some("bob".to_owned()),
            timestamp: Some("2024-05-01T10:15:00Z".to_owned()),
        })
    );
}

#[test]
fn decode_untyped_broadcast_is_a_chat_message() {
    let event = decode(serde_json::json!({"message": "hey", "sender": "bob"}));
    let PushEvent::ChatMessage(msg) = event else {
        panic!("expected chat message");
    };
    assert_eq!(msg.message, "hey");
    assert_eq!(msg.sender, "bob");
    assert!(msg.receiver.is_none());
    assert!(msg.timestamp.is_none());
}

#[test]
fn decode_chat_message_accepts_numeric_timestamp() {
    let event = decode(serde_json::json!({"type": "message", "message": "x", "sender": "a", "timestamp": 1700000000000_u64}));
    let PushEvent::ChatMessage(msg) = event else {
        panic!("expected chat message");
    };
    assert_eq!(msg.timestamp.as_deref(), Some("1700000000000"));
}

#[test]
fn decode_chat_message_without_sender_is_rejected() {
    let err = decode_event(r#"{"type":"chat_message","message":"hi"}"#).expect_err("sender is required");
    assert!(matches!(err, CodecError::MissingField("sender")));
}

// =============================================================
// Typing
// =============================================================

#[test]
fn decode_typing_indicator_reads_sender_and_flag() {
    let event = decode(serde_json::json!({"type": "typing_indicator", "sender": "bob", "is_typing": false}));
    assert_eq!(
        event,
        PushEvent::Typing(TypingUpdate { sender: Some("bob".to_owned()), is_typing: false })
    );
}

#[test]
fn decode_typing_defaults_to_started() {
    let event = decode(serde_json::json!({"type": "typing", "username": "bob"}));
    assert_eq!(
        event,
        PushEvent::Typing(TypingUpdate { sender: Some("bob".to_owned()), is_typing: true })
    );
}

#[test]
fn decode_typing_honours_explicit_flag() {
    let event = decode(serde_json::json!({"type": "typing", "username": "bob", "is_typing": false}));
    assert_eq!(
        event,
        PushEvent::Typing(TypingUpdate { sender: Some("bob".to_owned()), is_typing: false })
    );
}

#[test]
fn decode_bare_stopped_typing_has_no_sender() {
    let event = decode(serde_json::json!({"type": "stopped_typing"}));
    assert_eq!(event, PushEvent::Typing(TypingUpdate { sender: None, is_typing: false }));
}

#[test]
fn decode_typing_indicator_requires_flag() {
    let err = decode_event(r#"{"type":"typing_indicator","sender":"bob"}"#).expect_err("flag is required");
    assert!(matches!(err, CodecError::MissingField("is_typing")));
}

// =============================================================
// Presence and unread
// =============================================================

#[test]
fn decode_user_list_skips_rows_without_username() {
    let event = decode(serde_json::json!({
        "type": "user_list",
        "users": [
            {"username": "ann", "is_online": true},
            {"is_online": true},
            {"username": "bob"}
        ]
    }));
    assert_eq!(
        event,
        PushEvent::Presence(vec![
            UserPresence { username: "ann".to_owned(), is_online: true },
            UserPresence { username: "bob".to_owned(), is_online: false },
        ])
    );
}

#[test]
fn decode_user_list_rejects_non_array_users() {
    let err = decode_event(r#"{"type":"user_list","users":{}}"#).expect_err("users must be an array");
    assert!(matches!(err, CodecError::InvalidField { field: "users", .. }));
}

#[test]
fn decode_user_status_maps_status_string() {
    let online = decode(serde_json::json!({"type": "user_status", "user": "ann", "status": "online"}));
    let offline = decode(serde_json::json!({"type": "user_status", "user": "ann", "status": "offline"}));
    assert_eq!(
        online,
        PushEvent::Presence(vec![UserPresence { username: "ann".to_owned(), is_online: true }])
    );
    assert_eq!(
        offline,
        PushEvent::Presence(vec![UserPresence { username: "ann".to_owned(), is_online: false }])
    );
}

#[test]
fn decode_user_status_rejects_unknown_status() {
    let err = decode_event(r#"{"type":"user_status","user":"ann","status":"away"}"#).expect_err("bad status");
    assert!(matches!(err, CodecError::InvalidField { field: "status", .. }));
}

#[test]
fn decode_unread_update_with_and_without_count() {
    let bump = decode(serde_json::json!({"type": "unread_message_update", "sender": "bob"}));
    let set = decode(serde_json::json!({"type": "unread_message_update", "username": "bob", "count": 12}));
    assert_eq!(bump, PushEvent::UnreadUpdate(UnreadUpdate { username: "bob".to_owned(), count: None }));
    assert_eq!(set, PushEvent::UnreadUpdate(UnreadUpdate { username: "bob".to_owned(), count: Some(12) }));
}

#[test]
fn decode_unread_update_rejects_negative_count() {
    let err = decode_event(r#"{"type":"unread_message_update","sender":"bob","count":-1}"#).expect_err("negative");
    assert!(matches!(err, CodecError::InvalidField { field: "count", .. }));
}

// =============================================================
// Misc
// =============================================================

#[test]
fn decode_init_and_unknown_kinds() {
    assert_eq!(
        decode(serde_json::json!({"type": "init", "username": "ann"})),
        PushEvent::Init { username: Some("ann".to_owned()) }
    );
    assert_eq!(
        decode(serde_json::json!({"type": "ping"})),
        PushEvent::Unknown { kind: "ping".to_owned() }
    );
}

#[test]
fn decode_rejects_malformed_json_and_non_objects() {
    assert!(matches!(decode_event("{not json").expect_err("bad json"), CodecError::Json(_)));
    assert!(matches!(
        decode_event("[1,2]").expect_err("array payload"),
        CodecError::InvalidField { field: "payload", .. }
    ));
    assert!(matches!(
        decode_event(r#"{"type": 3}"#).expect_err("numeric type"),
        CodecError::InvalidField { field: "type", .. }
    ));
}

// =============================================================
// Outbound commands
// =============================================================

#[test]
fn encode_start_chat_matches_backend_shape() {
    let json: serde_json::Value =
        serde_json::from_str(&encode_command(&PushCommand::StartChat { receiver: "bob".to_owned() })).expect("json");
    assert_eq!(json, serde_json::json!({"type": "start_chat", "receiver": "bob"}));
}

#[test]
fn encode_chat_message_matches_backend_shape() {
    let command = PushCommand::ChatMessage {
        message: "hi".to_owned(),
        sender: "ann".to_owned(),
        receiver: "bob".to_owned(),
    };
    let json: serde_json::Value = serde_json::from_str(&encode_command(&command)).expect("json");
    assert_eq!(
        json,
        serde_json::json!({"type": "chat_message", "message": "hi", "sender": "ann", "receiver": "bob"})
    );
}

#[test]
fn typing_constructor_picks_kind_from_flag() {
    let start: serde_json::Value =
        serde_json::from_str(&encode_command(&PushCommand::typing("ann", "bob", true))).expect("json");
    let stop: serde_json::Value =
        serde_json::from_str(&encode_command(&PushCommand::typing("ann", "bob", false))).expect("json");
    assert_eq!(
        start,
        serde_json::json!({"type": "typing", "is_typing": true, "username": "ann", "receiver": "bob"})
    );
    assert_eq!(
        stop,
        serde_json::json!({"type": "stopped_typing", "is_typing": false, "username": "ann", "receiver": "bob"})
    );
}
