use futures::executor::block_on;

use super::*;
use crate::state::session::SessionManager;
use crate::state::test_support::{MockProvider, investigator};

fn signup(password: &str, confirm: &str) -> SignupForm {
    SignupForm {
        credentials: SignupCredentials {
            email: "new@arkham.test".to_owned(),
            password: password.to_owned(),
            confirm_password: confirm.to_owned(),
            name: "Agnes Baker".to_owned(),
        },
        ..SignupForm::default()
    }
}

fn session(provider: MockProvider) -> SessionManager<MockProvider> {
    let session = SessionManager::new(provider);
    block_on(session.bootstrap());
    session
}

// Same sequence the login and signup pages run around the provider call.
fn submit_login(form: &mut LoginForm, session: &SessionManager<MockProvider>) {
    let Some(creds) = form.begin_submit() else {
        return;
    };
    let result = block_on(session.sign_in(&creds.email, &creds.password));
    form.complete(result);
}

fn submit_signup(form: &mut SignupForm, session: &SessionManager<MockProvider>) {
    let Some(creds) = form.begin_submit() else {
        return;
    };
    let result = block_on(session.sign_up(&creds.email, &creds.password, &creds.name));
    form.complete(result);
}

// =============================================================
// Signup validation
// =============================================================

#[test]
fn short_password_is_rejected_without_provider_call() {
    let session = session(MockProvider::default());
    let mut form = signup("abc12", "abc12");
    submit_signup(&mut form, &session);
    assert_eq!(form.status.error.as_deref(), Some("Password must be at least 6 characters long"));
    assert!(!form.status.is_loading);
    assert_eq!(session.provider().count("sign_up"), 0);
}

#[test]
fn mismatched_passwords_are_rejected_without_provider_call() {
    let session = session(MockProvider::default());
    let mut form = signup("abc123", "xyz999");
    submit_signup(&mut form, &session);
    assert_eq!(form.status.error.as_deref(), Some("Passwords do not match"));
    assert_eq!(session.provider().count("sign_up"), 0);
}

#[test]
fn mismatch_is_reported_before_length() {
    assert_eq!(signup("abc", "xyz").credentials.validate(), Err(ValidationError::PasswordMismatch));
}

#[test]
fn password_length_counts_characters() {
    assert_eq!(signup("ñandú1", "ñandú1").credentials.validate(), Ok(()));
}

#[test]
fn valid_signup_calls_provider_exactly_once() {
    let session = session(MockProvider::default());
    let mut form = signup("abc123", "abc123");
    submit_signup(&mut form, &session);
    assert_eq!(session.provider().count("sign_up"), 1);
    assert!(form.confirmation_sent);
    assert_eq!(form.status, FormStatus::default());
    assert!(session.snapshot().user.is_none());
}

#[test]
fn provider_rejection_keeps_signup_editable() {
    let session = session(MockProvider {
        sign_up: Err(AuthError::Rejected("User already registered".to_owned())),
        ..MockProvider::default()
    });
    let mut form = signup("abc123", "abc123");
    submit_signup(&mut form, &session);
    assert!(!form.confirmation_sent);
    assert!(!form.status.is_loading);
    assert_eq!(form.status.error.as_deref(), Some("User already registered"));
}

#[test]
fn try_again_returns_to_form() {
    let mut form = signup("abc123", "abc123");
    form.complete(Ok(()));
    form.try_again();
    assert!(!form.confirmation_sent);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_failure_shows_provider_message_and_reenables_form() {
    let session = session(MockProvider {
        sign_in: Err(AuthError::Rejected("Invalid login credentials".to_owned())),
        ..MockProvider::default()
    });
    let mut form = LoginForm::default();
    form.credentials.email = "carter@miskatonic.edu".to_owned();
    form.credentials.password = "wrong".to_owned();

    submit_login(&mut form, &session);

    assert_eq!(form.status.error.as_deref(), Some("Invalid login credentials"));
    assert!(!form.status.is_loading);
    assert!(session.snapshot().user.is_none());
}

#[test]
fn login_transport_failure_shows_generic_message() {
    let session = session(MockProvider {
        sign_in: Err(AuthError::Transport("offline".to_owned())),
        ..MockProvider::default()
    });
    let mut form = LoginForm::default();
    submit_login(&mut form, &session);
    assert_eq!(form.status.error.as_deref(), Some("An unexpected error occurred"));
}

#[test]
fn login_success_signs_in() {
    let session = session(MockProvider::default());
    let mut form = LoginForm::default();
    submit_login(&mut form, &session);
    assert_eq!(form.status, FormStatus::default());
    assert_eq!(session.snapshot().user, Some(investigator()));
}

// =============================================================
// Per-form mutual exclusion
// =============================================================

#[test]
fn second_submit_is_refused_while_pending() {
    let mut form = LoginForm::default();
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());
    form.complete(Ok(()));
    assert!(form.begin_submit().is_some());
}

#[test]
fn pending_login_does_not_call_provider_again() {
    let session = session(MockProvider::default());
    let mut form = LoginForm::default();
    let _ = form.begin_submit();
    submit_login(&mut form, &session);
    assert_eq!(session.provider().count("sign_in"), 0);
    assert!(form.status.is_loading);
}

#[test]
fn begin_clears_previous_error() {
    let mut status = FormStatus { is_loading: false, error: Some("old".to_owned()) };
    assert!(status.begin());
    assert_eq!(status.error, None);
}
