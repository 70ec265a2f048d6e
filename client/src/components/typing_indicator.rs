//! "<peer> is typing..." line under the message list.

#[cfg(test)]
#[path = "typing_indicator_test.rs"]
mod typing_indicator_test;

use leptos::prelude::*;

use crate::state::chat::ChatState;

pub fn typing_text(peer: &str) -> String {
    format!("{peer} is typing...")
}

/// Present only while a peer is typing; removed from the DOM otherwise.
#[component]
pub fn TypingIndicator() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    move || {
        chat.with(|c| c.typing_peer().map(typing_text)).map(|text| {
            view! { <div id="typing-indicator" class="text-sm italic text-blue-500">{text}</div> }
        })
    }
}
