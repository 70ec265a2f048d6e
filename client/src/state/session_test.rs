use super::*;

#[test]
fn new_session_has_no_peer() {
    let session = Session::new("ann", "tok");
    assert_eq!(session.current_user, "ann");
    assert_eq!(session.csrf_token, "tok");
    assert!(session.peer().is_none());
}

#[test]
fn with_peer_sets_other_user() {
    let session = Session::new("ann", "tok").with_peer("bob");
    assert_eq!(session.peer(), Some("bob"));
}

#[test]
fn is_self_compares_exact_username() {
    let session = Session::new("ann", "tok");
    assert!(session.is_self("ann"));
    assert!(!session.is_self("Ann"));
    assert!(!session.is_self("bob"));
}
