use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_meta_uses_defaults_when_no_tags() {
    let config = ClientConfig::from_meta(lookup(&[])).expect("config");
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.reconnect_delay_ms, 5000);
    assert_eq!(config.typing_idle_ms, 1000);
    assert_eq!(config.chat_ws_path, "/ws/chat/");
}

#[test]
fn from_meta_applies_overrides() {
    let config = ClientConfig::from_meta(lookup(&[
        ("chat-ws-path", "/ws/room/"),
        ("status-ws-path", " /ws/status/ "),
        ("chat-reconnect-ms", "2500"),
        ("chat-typing-idle-ms", "800"),
        ("chat-typing-ttl-ms", "4000"),
    ]))
    .expect("config");
    assert_eq!(config.chat_ws_path, "/ws/room/");
    assert_eq!(config.status_ws_path, "/ws/status/");
    assert_eq!(config.reconnect_delay_ms, 2500);
    assert_eq!(config.typing_idle_ms, 800);
    assert_eq!(config.remote_typing_ttl_ms, 4000);
}

#[test]
fn from_meta_ignores_unparseable_numbers() {
    let config = ClientConfig::from_meta(lookup(&[("chat-reconnect-ms", "soon")])).expect("config");
    assert_eq!(config.reconnect_delay_ms, DEFAULT_RECONNECT_DELAY_MS);
}

#[test]
fn from_meta_rejects_zero_delay() {
    let err = ClientConfig::from_meta(lookup(&[("chat-typing-idle-ms", "0")])).expect_err("zero delay");
    assert_eq!(err, ConfigError::ZeroDelay { name: "chat-typing-idle-ms" });
}

#[test]
fn from_meta_rejects_relative_path() {
    let err = ClientConfig::from_meta(lookup(&[("chat-ws-path", "ws/chat/")])).expect_err("relative path");
    assert_eq!(err, ConfigError::RelativePath { name: "chat-ws-path", value: "ws/chat/".to_owned() });
}

#[test]
fn from_page_is_default_outside_the_browser() {
    #[cfg(not(feature = "csr"))]
    assert_eq!(ClientConfig::from_page().expect("config"), ClientConfig::default());
}
