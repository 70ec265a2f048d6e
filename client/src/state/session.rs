//! Identity of the browser user and, on the chat page, their peer.
//!
//! The page supplies both names; nothing here is validated beyond being
//! non-empty at mount time.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub current_user: String,
    /// Conversation partner; `None` outside the chat page.
    pub other_user: Option<String>,
    /// Value sent in the CSRF header of every HTTP call.
    pub csrf_token: String,
}

impl Session {
    pub fn new(current_user: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self {
            current_user: current_user.into(),
            other_user: None,
            csrf_token: csrf_token.into(),
        }
    }

    #[must_use]
    pub fn with_peer(mut self, other_user: impl Into<String>) -> Self {
        self.other_user = Some(other_user.into());
        self
    }

    #[must_use]
    pub fn is_self(&self, username: &str) -> bool {
        self.current_user == username
    }

    #[must_use]
    pub fn peer(&self) -> Option<&str> {
        self.other_user.as_deref()
    }
}
