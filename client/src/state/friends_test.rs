use super::*;

fn state() -> FriendRequestsState {
    FriendRequestsState::new(vec![
        FriendRequestItem::new("1", "ann"),
        FriendRequestItem::new("2", "bob"),
        FriendRequestItem::new("3", "cid"),
    ])
}

fn ids(state: &FriendRequestsState) -> Vec<&str> {
    state.incoming.iter().map(|item| item.id.as_str()).collect()
}

// =============================================================
// Accept / decline
// =============================================================

#[test]
fn successful_decision_removes_exactly_the_clicked_item() {
    let mut state = state();
    assert!(state.begin_decision("2"));
    state.finish_decision("2", Ok(()));
    assert_eq!(ids(&state), vec!["1", "3"]);
}

#[test]
fn failed_decision_keeps_item_with_error() {
    let mut state = state();
    assert!(state.begin_decision("2"));
    state.finish_decision("2", Err("request no longer exists".to_owned()));

    assert_eq!(ids(&state), vec!["1", "2", "3"]);
    let item = state.item("2").expect("item stays");
    assert!(!item.pending);
    assert_eq!(item.error.as_deref(), Some("request no longer exists"));
    assert!(state.item("1").expect("untouched").error.is_none());
}

#[test]
fn begin_decision_rejects_unknown_and_pending_items() {
    let mut state = state();
    assert!(!state.begin_decision("99"));
    assert!(state.begin_decision("1"));
    assert!(!state.begin_decision("1"));
}

#[test]
fn retry_after_failure_clears_previous_error() {
    let mut state = state();
    state.begin_decision("1");
    state.finish_decision("1", Err("boom".to_owned()));
    assert!(state.begin_decision("1"));
    assert!(state.item("1").expect("item").error.is_none());
}

#[test]
fn items_deserialize_with_defaults() {
    let items: Vec<FriendRequestItem> =
        serde_json::from_str(r#"[{"id":"7","from_user":"dee"}]"#).expect("items");
    assert_eq!(items, vec![FriendRequestItem::new("7", "dee")]);
}

// =============================================================
// Add friend
// =============================================================

#[test]
fn add_friend_flow_tracks_status() {
    let mut state = FriendRequestsState::default();
    assert!(state.add_status("bob").is_none());

    assert!(state.begin_add("bob"));
    assert_eq!(state.add_status("bob"), Some(&AddFriendStatus::Pending));
    assert!(!state.begin_add("bob"));

    state.finish_add("bob", Ok(()));
    assert_eq!(state.add_status("bob"), Some(&AddFriendStatus::Sent));
    assert!(!state.begin_add("bob"));
}

#[test]
fn failed_add_can_be_retried() {
    let mut state = FriendRequestsState::default();
    state.begin_add("bob");
    state.finish_add("bob", Err("already friends".to_owned()));
    assert_eq!(state.add_status("bob"), Some(&AddFriendStatus::Failed("already friends".to_owned())));
    assert!(state.begin_add("bob"));
}
