//! Chat message list for the private conversation view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `ChatState::messages` populated by the chat push channel. Bodies
//! are escaped before they reach `inner_html`; only the `<br>` line breaks
//! added after escaping are real markup.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatState};
use crate::util::clock::display_time;
use crate::util::html::message_body_html;

/// Outer row: own messages hug the right edge.
pub fn row_class(is_own: bool) -> &'static str {
    if is_own { "flex justify-end" } else { "flex" }
}

pub fn bubble_class(is_own: bool) -> &'static str {
    if is_own {
        "max-w-xs lg:max-w-md p-3 rounded-lg bg-indigo-600 text-white"
    } else {
        "max-w-xs lg:max-w-md p-3 rounded-lg bg-gray-200"
    }
}

pub fn time_class(is_own: bool) -> &'static str {
    if is_own { "text-xs text-indigo-200" } else { "text-xs text-gray-500" }
}

/// Append-only list of chat bubbles that keeps the newest one in view.
#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let list_ref = NodeRef::<leptos::html::Div>::new();
    let utc_offset = crate::util::page::utc_offset_minutes();

    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
                // The mount target is usually the scrolling container.
                if let Some(parent) = el.parent_element() {
                    parent.set_scroll_top(parent.scroll_height());
                }
            }
        }
    });

    view! {
        <div class="chat-message-list flex flex-col gap-2" node_ref=list_ref>
            <For
                each=move || chat.with(|c| c.messages.iter().cloned().enumerate().collect::<Vec<_>>())
                key=|(index, _)| *index
                children=move |(_, msg)| message_row(msg, utc_offset)
            />
        </div>
    }
}

fn message_row(msg: ChatMessage, utc_offset: i32) -> impl IntoView {
    let body = message_body_html(&msg.body);
    let time = display_time(msg.timestamp.as_deref(), msg.received_at_ms, utc_offset);

    view! {
        <div class=row_class(msg.is_own)>
            <div class=bubble_class(msg.is_own)>
                <p inner_html=body></p>
                <span class=time_class(msg.is_own)>{time}</span>
            </div>
        </div>
    }
}
