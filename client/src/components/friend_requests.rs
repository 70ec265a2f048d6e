//! Incoming friend requests with accept/decline actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each click posts to `/friend-request/{accept,decline}/`. The row stays
//! until the server confirms; a failure leaves it with the error text.

use leptos::prelude::*;

use crate::net::types::FriendDecision;
use crate::state::friends::FriendRequestsState;
use crate::state::session::Session;

#[component]
pub fn FriendRequests() -> impl IntoView {
    let friends = expect_context::<RwSignal<FriendRequestsState>>();
    let session = StoredValue::new(expect_context::<Session>());

    let decide = move |id: String, decision: FriendDecision| {
        if !friends.try_update(|f| f.begin_decision(&id)).unwrap_or(false) {
            return;
        }
        let csrf_token = session.with_value(|s| s.csrf_token.clone());
        send_decision(friends, csrf_token, id, decision);
    };

    view! {
        <ul class="friend-requests divide-y">
            <For
                each=move || friends.with(|f| f.incoming.iter().map(|item| (item.id.clone(), item.from_user.clone())).collect::<Vec<_>>())
                key=|(id, _)| id.clone()
                children=move |(id, from_user)| {
                    let pending_id = id.clone();
                    let error_id = id.clone();
                    let accept_id = id.clone();
                    let decline_id = id;
                    let is_pending = move || friends.with(|f| f.item(&pending_id).is_some_and(|item| item.pending));
                    view! {
                        <li class="friend-request flex items-center gap-2 p-3">
                            <span class="font-medium flex-1">{from_user}</span>
                            <button
                                class="bg-green-600 text-white rounded px-3 py-1 text-sm"
                                disabled=is_pending.clone()
                                on:click=move |_| decide(accept_id.clone(), FriendDecision::Accept)
                            >
                                "Accept"
                            </button>
                            <button
                                class="bg-gray-300 rounded px-3 py-1 text-sm"
                                disabled=is_pending
                                on:click=move |_| decide(decline_id.clone(), FriendDecision::Decline)
                            >
                                "Decline"
                            </button>
                            {move || {
                                friends.with(|f| f.item(&error_id).and_then(|item| item.error.clone()))
                                    .map(|message| view! { <span class="text-xs text-red-600">{message}</span> })
                            }}
                        </li>
                    }
                }
            />
        </ul>
    }
}

fn send_decision(friends: RwSignal<FriendRequestsState>, csrf_token: String, id: String, decision: FriendDecision) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::decide_friend_request(&csrf_token, &id, decision)
                .await
                .map_err(|e| {
                    leptos::logging::warn!("friend-request {} {id} failed: {e}", decision.as_str());
                    e.user_message()
                });
            friends.update(|f| f.finish_decision(&id, result));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (friends, csrf_token, id, decision);
    }
}
