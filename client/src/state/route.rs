//! View selection for the application root.
//!
//! The selected view is a pure function of the session state, the path
//! captured once at mount, and the local login/signup toggle. The router does
//! not follow in-page navigation.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::state::auth::AuthState;

/// Path the identity provider redirects to from emailed links.
pub const CONFIRM_PATH: &str = "/auth/confirm";
/// Application root.
pub const ROOT_PATH: &str = "/";

/// Which unauthenticated form is shown. Local UI state, never session state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

/// Exactly one of these is rendered at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Loading,
    Confirmation,
    Dashboard,
    Login,
    Signup,
}

/// Choose the view. First match wins: loading, confirmation path, signed-in
/// user, then the requested auth form.
pub fn select_view(state: &AuthState, path: &str, mode: AuthMode) -> View {
    if state.loading {
        View::Loading
    } else if path == CONFIRM_PATH {
        View::Confirmation
    } else if state.is_authenticated() {
        View::Dashboard
    } else {
        match mode {
            AuthMode::Login => View::Login,
            AuthMode::Signup => View::Signup,
        }
    }
}
