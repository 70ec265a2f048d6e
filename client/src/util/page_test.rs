#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn ws_url_uses_plain_scheme_for_http_pages() {
    assert_eq!(ws_url("http:", "example.com:8000", "/ws/chat/"), "ws://example.com:8000/ws/chat/");
}

#[test]
fn ws_url_upgrades_to_wss_for_https_pages() {
    assert_eq!(ws_url("https:", "chat.example.com", "/ws/status/"), "wss://chat.example.com/ws/status/");
}

#[test]
fn browser_lookups_are_empty_outside_the_browser() {
    assert!(meta_content("current-user").is_none());
    assert!(csrf_token().is_none());
    assert_eq!(utc_offset_minutes(), 0);
    assert_eq!(socket_url("/ws/chat/"), "ws://localhost:8000/ws/chat/");
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000.0);
}
