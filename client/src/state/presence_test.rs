use super::*;

fn row(username: &str, is_online: bool) -> UserPresence {
    UserPresence { username: username.to_owned(), is_online }
}

#[test]
fn apply_presence_last_write_wins() {
    let mut state = PresenceState::default();
    state.apply_presence(vec![row("ann", true), row("bob", false)]);
    state.apply_presence(vec![row("ann", false)]);

    assert_eq!(state.is_online("ann"), Some(false));
    assert_eq!(state.is_online("bob"), Some(false));
    assert_eq!(state.is_online("cid"), None);
}

#[test]
fn seed_unread_marks_loaded_and_keeps_pushed_users() {
    let mut state = PresenceState::default();
    state.apply_unread(UnreadUpdate { username: "cid".to_owned(), count: None });

    let mut counts = UnreadCounts::new();
    counts.insert("bob".to_owned(), 4);
    state.seed_unread(counts);

    assert!(state.unread_loaded);
    assert_eq!(state.unread_count("bob"), 4);
    assert_eq!(state.unread_count("cid"), 1);
}

#[test]
fn apply_unread_increments_without_count_and_overwrites_with_count() {
    let mut state = PresenceState::default();
    state.apply_unread(UnreadUpdate { username: "bob".to_owned(), count: None });
    state.apply_unread(UnreadUpdate { username: "bob".to_owned(), count: None });
    assert_eq!(state.unread_count("bob"), 2);

    state.apply_unread(UnreadUpdate { username: "bob".to_owned(), count: Some(7) });
    assert_eq!(state.unread_count("bob"), 7);
}

#[test]
fn apply_unread_saturates() {
    let mut state = PresenceState::default();
    state.apply_unread(UnreadUpdate { username: "bob".to_owned(), count: Some(u32::MAX) });
    state.apply_unread(UnreadUpdate { username: "bob".to_owned(), count: None });
    assert_eq!(state.unread_count("bob"), u32::MAX);
}

#[test]
fn unread_badge_follows_count() {
    let mut state = PresenceState::default();
    assert_eq!(state.unread_badge("bob"), None);

    state.apply_unread(UnreadUpdate { username: "bob".to_owned(), count: Some(3) });
    assert_eq!(state.unread_badge("bob").as_deref(), Some("3"));

    state.apply_unread(UnreadUpdate { username: "bob".to_owned(), count: Some(10) });
    assert_eq!(state.unread_badge("bob").as_deref(), Some("9+"));

    state.clear_unread("bob");
    assert_eq!(state.unread_badge("bob"), None);
}
