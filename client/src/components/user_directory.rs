//! User directory with presence badges, unread counters, and "add friend".
//!
//! SYSTEM CONTEXT
//! ==============
//! The user rows come from the server-rendered page. Presence and unread
//! badges are driven by the status push channel plus the one-time unread
//! snapshot; "add friend" posts to `/add-friend/`.

#[cfg(test)]
#[path = "user_directory_test.rs"]
mod user_directory_test;

use leptos::prelude::*;
use serde::Deserialize;

use crate::state::friends::{AddFriendStatus, FriendRequestsState};
use crate::state::presence::PresenceState;
use crate::state::session::Session;
use crate::util::badge::{presence_class, presence_label};

/// A row of the directory as rendered by the page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DirectoryUser {
    pub username: String,
    #[serde(default)]
    pub is_friend: bool,
}

pub fn chat_href(username: &str) -> String {
    format!("/chat/{username}/")
}

pub fn add_friend_label(status: Option<&AddFriendStatus>) -> &'static str {
    match status {
        None | Some(AddFriendStatus::Failed(_)) => "Add friend",
        Some(AddFriendStatus::Pending) => "Sending...",
        Some(AddFriendStatus::Sent) => "Request sent",
    }
}

/// Online/Offline pill for `username`; absent until presence is known.
#[component]
pub fn PresenceBadge(username: String) -> impl IntoView {
    let presence = expect_context::<RwSignal<PresenceState>>();

    move || {
        presence.with(|p| p.is_online(&username)).map(|online| {
            view! { <span class=presence_class(online)>{presence_label(online)}</span> }
        })
    }
}

/// Directory list. The current user is not listed.
#[component]
pub fn UserDirectory(users: Vec<DirectoryUser>) -> impl IntoView {
    let presence = expect_context::<RwSignal<PresenceState>>();
    let friends = expect_context::<RwSignal<FriendRequestsState>>();
    let session = StoredValue::new(expect_context::<Session>());

    let on_add = move |username: String| {
        if !friends.try_update(|f| f.begin_add(&username)).unwrap_or(false) {
            return;
        }
        let csrf_token = session.with_value(|s| s.csrf_token.clone());
        send_add_friend(friends, csrf_token, username);
    };

    let rows = users
        .into_iter()
        .filter(|user| !session.with_value(|s| s.is_self(&user.username)))
        .map(|user| {
            let name = user.username.clone();
            let unread_name = name.clone();
            let add_name = name.clone();
            let label_name = name.clone();
            let error_name = name.clone();

            let unread_badge = move || {
                presence.with(|p| p.unread_badge(&unread_name)).map(|label| {
                    view! {
                        <span class="unread-badge ml-2 inline-flex items-center justify-center px-2 py-0.5 rounded-full text-xs font-bold bg-red-600 text-white">
                            {label}
                        </span>
                    }
                })
            };
            let add_button = (!user.is_friend).then(|| {
                let busy_name = add_name.clone();
                view! {
                    <button
                        class="ml-auto text-sm text-indigo-600 hover:underline"
                        disabled=move || {
                            friends.with(|f| {
                                matches!(f.add_status(&busy_name), Some(AddFriendStatus::Pending | AddFriendStatus::Sent))
                            })
                        }
                        on:click=move |_| on_add(add_name.clone())
                    >
                        {move || friends.with(|f| add_friend_label(f.add_status(&label_name)))}
                    </button>
                }
            });
            let add_error = move || {
                friends.with(|f| match f.add_status(&error_name) {
                    Some(AddFriendStatus::Failed(message)) => Some(message.clone()),
                    _ => None,
                })
                .map(|message| view! { <div class="text-xs text-red-600">{message}</div> })
            };

            view! {
                <li class="user-item flex items-center p-3 border-b">
                    <a href=chat_href(&name) data-username=name.clone() class="flex items-center">
                        <div class="ml-4 flex items-center">
                            <span class="font-medium">{name.clone()}</span>
                            <PresenceBadge username=name.clone() />
                            {unread_badge}
                        </div>
                    </a>
                    {add_button}
                    {add_error}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! { <ul class="user-directory divide-y">{rows}</ul> }
}

fn send_add_friend(friends: RwSignal<FriendRequestsState>, csrf_token: String, username: String) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::send_friend_request(&csrf_token, &username)
                .await
                .map_err(|e| {
                    leptos::logging::warn!("add-friend {username} failed: {e}");
                    e.user_message()
                });
            friends.update(|f| f.finish_add(&username, result));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (friends, csrf_token, username);
    }
}
