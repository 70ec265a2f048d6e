//! Browser client for one-to-one chat: live messages, typing indicators,
//! presence, unread counters, and friend requests.
//!
//! ARCHITECTURE
//! ============
//! - `net` owns the websocket push channels and the JSON HTTP calls.
//! - `state` holds plain structs kept in Leptos signals.
//! - `components` render into mount points the server-rendered page provides.
//! - `app` wires state, channels, and components together per page.
//!
//! Everything that needs a browser is behind the `csr` feature; the rest
//! builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "csr")]
fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Start the private chat page.
///
/// # Errors
///
/// Rejects when the page lacks the `current-user`/`other-user` meta tags or
/// carries an invalid client config.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn start_chat_page(
    messages: web_sys::HtmlElement,
    typing: web_sys::HtmlElement,
    composer: web_sys::HtmlElement,
    peer_status: Option<web_sys::HtmlElement>,
) -> Result<(), JsValue> {
    use util::page::{csrf_token, meta_content};

    let session = app::session_from_page(meta_content, csrf_token(), true).map_err(to_js_error)?;
    let config = config::ClientConfig::from_page().map_err(to_js_error)?;
    app::mount_chat(app::ChatTargets { messages, typing, composer, peer_status }, session, config);
    Ok(())
}

/// Start the user-directory page. `users_json` and `requests_json` are the
/// lists the server rendered into the page.
///
/// # Errors
///
/// Rejects when the page lacks the `current-user` meta tag, carries an
/// invalid client config, or either list is not valid JSON.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn start_directory_page(
    users: web_sys::HtmlElement,
    friend_requests: Option<web_sys::HtmlElement>,
    users_json: &str,
    requests_json: &str,
) -> Result<(), JsValue> {
    use util::page::{csrf_token, meta_content};

    let session = app::session_from_page(meta_content, csrf_token(), false).map_err(to_js_error)?;
    let config = config::ClientConfig::from_page().map_err(to_js_error)?;
    let (user_rows, requests) = app::parse_directory_seed(users_json, requests_json).map_err(to_js_error)?;
    app::mount_directory(
        app::DirectoryTargets { users, friend_requests },
        session,
        user_rows,
        requests,
        config,
    );
    Ok(())
}
