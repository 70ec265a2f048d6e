//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and small pure
//! policies (escaping, formatting, debounce, reconnect) from component and
//! network logic to improve reuse and testability.

pub mod badge;
pub mod clock;
pub mod html;
pub mod page;
pub mod reconnect;
pub mod typing;
