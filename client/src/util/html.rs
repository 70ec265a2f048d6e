//! HTML escaping for user-supplied message text.
//!
//! Message bodies are inserted as markup (so line breaks survive), which
//! makes escaping the only thing standing between a peer and script
//! injection. Every body goes through [`message_body_html`].

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Markup for a message body: escaped text with newlines as `<br>`.
#[must_use]
pub fn message_body_html(raw: &str) -> String {
    escape_html(raw).replace('\n', "<br>")
}
