use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

#[test]
fn resolved_clears_loading() {
    let user = User { id: "u1".to_owned(), email: "a@b.com".to_owned(), name: None };
    let state = AuthState::resolved(Some(user.clone()));
    assert!(!state.loading);
    assert_eq!(state.user, Some(user));
    assert!(state.is_authenticated());
}
