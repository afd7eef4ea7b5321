//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the view router to choose between the loading screen, dashboard,
//! and auth forms. Only [`crate::state::session::SessionManager`] writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only while the initial session check is in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// The bootstrap state: still loading, nobody signed in.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// State after the initial session check has resolved.
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
