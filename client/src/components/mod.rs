//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render into page-provided mount points and read/write shared
//! state from Leptos context providers set up in `app`.

pub mod composer;
pub mod friend_requests;
pub mod message_list;
pub mod typing_indicator;
pub mod user_directory;
