//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by responsibility (`chat`, `presence`, `friends`) so each
//! push channel and component depends on a small focused model. Every model
//! is a plain struct wrapped in an `RwSignal` by `app`; the transitions live
//! here as methods so they can be tested without a browser.

pub mod chat;
pub mod connection;
pub mod friends;
pub mod presence;
pub mod session;
