//! Page-level browser access: meta tags, CSRF token, socket URLs, clock.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server-rendered page hands identity and configuration to the client
//! through `<meta name=...>` tags and the CSRF hidden input. Everything that
//! touches `window`/`document` lives here so the rest of the crate only sees
//! plain values. Outside the browser every lookup comes back empty.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Build a websocket URL for `path` on the page's own host, upgrading to
/// `wss` when the page was served over HTTPS.
#[must_use]
pub fn ws_url(page_protocol: &str, host: &str, path: &str) -> String {
    let scheme = if page_protocol == "https:" { "wss" } else { "ws" };
    format!("{scheme}://{host}{path}")
}

/// Websocket URL for `path` relative to the current page location.
#[must_use]
pub fn socket_url(path: &str) -> String {
    #[cfg(feature = "csr")]
    {
        let location = web_sys::window().map(|w| w.location());
        let protocol = location
            .as_ref()
            .and_then(|l| l.protocol().ok())
            .unwrap_or_else(|| "http:".to_owned());
        let host = location
            .as_ref()
            .and_then(|l| l.host().ok())
            .unwrap_or_else(|| "localhost:8000".to_owned());
        ws_url(&protocol, &host, path)
    }
    #[cfg(not(feature = "csr"))]
    {
        ws_url("http:", "localhost:8000", path)
    }
}

/// Read the `content` of `<meta name="{name}">`, ignoring blank values.
#[must_use]
pub fn meta_content(name: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let doc = web_sys::window()?.document()?;
        let el = doc.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten()?;
        el.get_attribute("content").filter(|v| !v.trim().is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}

/// CSRF token from the form's hidden input, falling back to a `csrf-token` meta tag.
#[must_use]
pub fn csrf_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let doc = web_sys::window()?.document()?;
        let from_input = doc
            .query_selector("[name=csrfmiddlewaretoken]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.value())
            .filter(|v| !v.is_empty());
        from_input.or_else(|| meta_content("csrf-token"))
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Current time in epoch milliseconds.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Local zone offset in minutes east of UTC.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn utc_offset_minutes() -> i32 {
    #[cfg(feature = "csr")]
    {
        // getTimezoneOffset is UTC minus local, i.e. minutes west.
        -(js_sys::Date::new_0().get_timezone_offset() as i32)
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}
