use futures::channel::mpsc;

use super::*;

#[test]
fn push_sender_queues_encoded_commands_in_order() {
    let (tx, mut rx) = mpsc::unbounded::<String>();
    let sender = PushSender::new(tx);

    assert!(sender.send(&PushCommand::StartChat { receiver: "bob".to_owned() }));
    assert!(sender.send(&PushCommand::typing("ann", "bob", true)));

    let first: serde_json::Value =
        serde_json::from_str(&rx.try_next().expect("open").expect("frame")).expect("json");
    assert_eq!(first, serde_json::json!({"type": "start_chat", "receiver": "bob"}));

    let second: serde_json::Value =
        serde_json::from_str(&rx.try_next().expect("open").expect("frame")).expect("json");
    assert_eq!(second["type"], "typing");
    assert_eq!(second["is_typing"], true);
}

#[test]
fn push_sender_reports_closed_channel() {
    let (tx, rx) = mpsc::unbounded::<String>();
    let sender = PushSender::new(tx);
    drop(rx);
    assert!(!sender.send(&PushCommand::StartChat { receiver: "bob".to_owned() }));
}

#[test]
fn cloned_senders_share_one_queue() {
    let (tx, mut rx) = mpsc::unbounded::<String>();
    let a = PushSender::new(tx);
    let b = a.clone();
    a.send(&PushCommand::StartChat { receiver: "x".to_owned() });
    b.send(&PushCommand::StartChat { receiver: "y".to_owned() });
    assert!(rx.try_next().expect("open").expect("frame").contains("\"x\""));
    assert!(rx.try_next().expect("open").expect("frame").contains("\"y\""));
}
