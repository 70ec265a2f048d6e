use std::collections::HashMap;

use super::*;

fn metas(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn chat_session_reads_both_identities() {
    let session = session_from_page(
        metas(&[("current-user", "ann"), ("other-user", "bob")]),
        Some("tok".to_owned()),
        true,
    )
    .expect("session");
    assert_eq!(session, Session::new("ann", "tok").with_peer("bob"));
}

#[test]
fn chat_session_requires_peer() {
    let err = session_from_page(metas(&[("current-user", "ann")]), None, true).expect_err("peer required");
    assert!(matches!(err, MountError::MissingIdentity("other-user")));
}

#[test]
fn directory_session_ignores_peer_and_tolerates_missing_csrf() {
    let session = session_from_page(metas(&[("current-user", "ann")]), None, false).expect("session");
    assert_eq!(session.peer(), None);
    assert_eq!(session.csrf_token, "");
}

#[test]
fn missing_current_user_is_an_error() {
    let err = session_from_page(metas(&[]), Some("tok".to_owned()), false).expect_err("user required");
    assert_eq!(err.to_string(), "page is missing the `current-user` meta tag");
}

#[test]
fn directory_seed_parses_users_and_requests() {
    let (users, requests) = parse_directory_seed(
        r#"[{"username":"bob","is_friend":true},{"username":"cid"}]"#,
        r#"[{"id":"4","from_user":"dee"}]"#,
    )
    .expect("seed");
    assert_eq!(users.len(), 2);
    assert!(users[0].is_friend);
    assert_eq!(requests, vec![FriendRequestItem::new("4", "dee")]);
}

#[test]
fn blank_seed_means_empty_lists() {
    let (users, requests) = parse_directory_seed("", "  ").expect("seed");
    assert!(users.is_empty());
    assert!(requests.is_empty());
}

#[test]
fn malformed_seed_is_reported() {
    let err = parse_directory_seed("[{", "[]").expect_err("bad json");
    assert!(matches!(err, MountError::Seed(_)));
}
