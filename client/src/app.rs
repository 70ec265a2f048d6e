//! Page entry points: build state, start push channels, mount components.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders each page and leaves empty mount points. `mount_chat`
//! and `mount_directory` are called once per page load with those elements;
//! nothing runs at module load. Each mount point gets its own Leptos root, so
//! shared state is provided as context to every root.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::components::user_directory::DirectoryUser;
use crate::config::ConfigError;
use crate::state::friends::FriendRequestItem;
use crate::state::session::Session;

/// Failure to start a page.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("page is missing the `{0}` meta tag")]
    MissingIdentity(&'static str),
    #[error("invalid client config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid page data: {0}")]
    Seed(#[from] serde_json::Error),
}

/// Build the session from page meta tags.
///
/// `current-user` is always required; `other-user` only on the chat page.
///
/// # Errors
///
/// Returns [`MountError::MissingIdentity`] naming the absent tag.
pub fn session_from_page<F>(lookup: F, csrf_token: Option<String>, needs_peer: bool) -> Result<Session, MountError>
where
    F: Fn(&str) -> Option<String>,
{
    let current_user = lookup("current-user").ok_or(MountError::MissingIdentity("current-user"))?;
    let session = Session::new(current_user, csrf_token.unwrap_or_default());
    if !needs_peer {
        return Ok(session);
    }
    let other_user = lookup("other-user").ok_or(MountError::MissingIdentity("other-user"))?;
    Ok(session.with_peer(other_user))
}

/// Decode the directory rows and incoming requests embedded in the page.
/// Blank input means an empty list.
///
/// # Errors
///
/// Returns [`MountError::Seed`] when either payload is not valid JSON.
pub fn parse_directory_seed(
    users_json: &str,
    requests_json: &str,
) -> Result<(Vec<DirectoryUser>, Vec<FriendRequestItem>), MountError> {
    let users = parse_list(users_json)?;
    let requests = parse_list(requests_json)?;
    Ok((users, requests))
}

fn parse_list<T: serde::de::DeserializeOwned>(raw: &str) -> Result<Vec<T>, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw)
}

#[cfg(feature = "csr")]
pub use self::browser::{ChatTargets, DirectoryTargets, mount_chat, mount_directory};

#[cfg(feature = "csr")]
mod browser {
    use leptos::prelude::*;
    use web_sys::HtmlElement;

    use crate::components::composer::Composer;
    use crate::components::friend_requests::FriendRequests;
    use crate::components::message_list::MessageList;
    use crate::components::typing_indicator::TypingIndicator;
    use crate::components::user_directory::{DirectoryUser, PresenceBadge, UserDirectory};
    use crate::config::ClientConfig;
    use crate::net::push_client::{PushChannel, spawn_push_client};
    use crate::state::chat::ChatState;
    use crate::state::friends::{FriendRequestItem, FriendRequestsState};
    use crate::state::presence::PresenceState;
    use crate::state::session::Session;

    /// Mount points on the chat page.
    pub struct ChatTargets {
        pub messages: HtmlElement,
        pub typing: HtmlElement,
        pub composer: HtmlElement,
        /// Optional slot for the peer's presence badge.
        pub peer_status: Option<HtmlElement>,
    }

    /// Mount points on the user-directory page.
    pub struct DirectoryTargets {
        pub users: HtmlElement,
        pub friend_requests: Option<HtmlElement>,
    }

    pub(crate) fn init_logging() {
        console_error_panic_hook::set_once();
        // A second mount on the same page finds the logger already set.
        let _ = console_log::init_with_level(log::Level::Debug);
    }

    /// Start the chat view for `session.other_user`.
    pub fn mount_chat(targets: ChatTargets, session: Session, config: ClientConfig) {
        init_logging();
        let Some(peer) = session.peer().map(str::to_owned) else {
            log::error!("chat page mounted without a peer");
            return;
        };
        log::info!("mounting chat {} -> {peer}", session.current_user);

        let chat = RwSignal::new(ChatState::default());
        let presence = RwSignal::new(PresenceState::default());

        let sender = spawn_push_client(
            PushChannel::Chat {
                chat,
                session: session.clone(),
                remote_typing_ttl_ms: config.remote_typing_ttl_ms,
            },
            &config.chat_ws_path,
            config.reconnect_delay_ms,
        );
        spawn_push_client(PushChannel::Status { presence }, &config.status_ws_path, config.reconnect_delay_ms);
        load_unread_snapshot(presence, session.csrf_token.clone(), Some(peer.clone()));

        let provide = {
            let session = session.clone();
            let config = config.clone();
            move || {
                provide_context(chat);
                provide_context(presence);
                provide_context(session.clone());
                provide_context(sender.clone());
                provide_context(config.clone());
            }
        };

        mount_root(targets.messages, provide.clone(), || view! { <MessageList /> });
        mount_root(targets.typing, provide.clone(), || view! { <TypingIndicator /> });
        mount_root(targets.composer, provide.clone(), || view! { <Composer /> });
        if let Some(el) = targets.peer_status {
            mount_root(el, provide, move || view! { <PresenceBadge username=peer /> });
        }
    }

    /// Start the user directory and, if present, the friend-request list.
    pub fn mount_directory(
        targets: DirectoryTargets,
        session: Session,
        users: Vec<DirectoryUser>,
        requests: Vec<FriendRequestItem>,
        config: ClientConfig,
    ) {
        init_logging();
        log::info!("mounting directory for {} ({} users)", session.current_user, users.len());

        let presence = RwSignal::new(PresenceState::default());
        let friends = RwSignal::new(FriendRequestsState::new(requests));

        spawn_push_client(PushChannel::Status { presence }, &config.status_ws_path, config.reconnect_delay_ms);
        load_unread_snapshot(presence, session.csrf_token.clone(), None);

        let provide = {
            let session = session.clone();
            move || {
                provide_context(presence);
                provide_context(friends);
                provide_context(session.clone());
            }
        };

        mount_root(targets.users, provide.clone(), move || view! { <UserDirectory users=users /> });
        if let Some(el) = targets.friend_requests {
            mount_root(el, provide, || view! { <FriendRequests /> });
        }
    }

    fn mount_root<P, F, N>(parent: HtmlElement, provide: P, view_fn: F)
    where
        P: FnOnce() + 'static,
        F: FnOnce() -> N + 'static,
        N: IntoView + 'static,
    {
        leptos::mount::mount_to(parent, move || {
            provide();
            view_fn()
        })
        .forget();
    }

    /// Apply the one-time unread snapshot. `opened` is the peer whose chat is
    /// on screen; their counter is cleared after seeding.
    fn load_unread_snapshot(presence: RwSignal<PresenceState>, csrf_token: String, opened: Option<String>) {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_unread_counts(&csrf_token).await {
                Ok(counts) => presence.update(|p| p.seed_unread(counts)),
                Err(e) => leptos::logging::warn!("unread snapshot failed: {e}"),
            }
            if let Some(peer) = opened {
                presence.update(|p| p.clear_unread(&peer));
            }
        });
    }
}
