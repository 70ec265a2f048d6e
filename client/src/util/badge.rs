//! Badge text for unread counters and presence.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

/// Largest count shown literally; anything above renders as `"9+"`.
pub const MAX_LITERAL_UNREAD: u32 = 9;

/// Unread badge label, or `None` when the badge should be hidden.
#[must_use]
pub fn unread_badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > MAX_LITERAL_UNREAD => Some(format!("{MAX_LITERAL_UNREAD}+")),
        n => Some(n.to_string()),
    }
}

#[must_use]
pub fn presence_label(is_online: bool) -> &'static str {
    if is_online { "Online" } else { "Offline" }
}

#[must_use]
pub fn presence_class(is_online: bool) -> &'static str {
    if is_online {
        "status-indicator ml-2 inline-flex items-center px-2.5 py-1 rounded-full text-xs font-medium bg-green-100 text-green-800"
    } else {
        "status-indicator ml-2 inline-flex items-center px-2.5 py-1 rounded-full text-xs font-medium bg-red-100 text-red-800"
    }
}
