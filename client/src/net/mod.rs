//! Networking modules for the HTTP endpoints and the websocket push channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the JSON HTTP calls, `push_client` manages the websocket
//! lifecycle, and `types` re-exports the shared wire schema.

pub mod api;
pub mod push_client;
pub mod types;
