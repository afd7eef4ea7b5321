//! One-shot handling of the identity provider's email-link callback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider redirects emailed confirmation and recovery links to
//! `/auth/confirm`, carrying `type` and `access_token` in the URL fragment.
//! [`ConfirmationHandler`] is built once per page load, classifies that
//! fragment, and owns the automatic redirect back to the root.
//!
//! State machine: `Pending -> Success | Error`. Both outcomes are terminal.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use std::time::Duration;

use crate::state::route::ROOT_PATH;
use crate::util::navigation::Navigator;

/// Delay before a confirmed signup is sent back to the root.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

pub const SIGNUP_CONFIRMED_MESSAGE: &str = "Your email has been confirmed! You can now use your account.";
pub const RECOVERY_MESSAGE: &str = "Please set your new password.";
pub const INVALID_LINK_MESSAGE: &str = "Invalid confirmation link or link has expired.";
pub const CONFIRMATION_FAILED_MESSAGE: &str = "An error occurred during confirmation. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    Pending,
    Success(String),
    Error(String),
}

impl ConfirmationOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pending => None,
            Self::Success(message) | Self::Error(message) => Some(message),
        }
    }
}

/// Parameters the provider appends to the callback fragment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CallbackParams {
    /// The `type` parameter.
    pub kind: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl CallbackParams {
    /// Parse an `application/x-www-form-urlencoded` fragment (no leading `#`).
    /// A repeated key keeps its first value; unknown keys are skipped.
    ///
    /// # Errors
    ///
    /// Fails only when the decoder rejects the fragment.
    pub fn parse(fragment: &str) -> Result<Self, serde_urlencoded::de::Error> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(fragment)?;
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "type" => &mut params.kind,
                "access_token" => &mut params.access_token,
                "refresh_token" => &mut params.refresh_token,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        Ok(params)
    }

    fn has_access_token(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// What a callback link turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    SignupConfirmed,
    Recovery,
    Invalid,
}

/// Ordered rules, first match wins.
pub fn classify(params: &CallbackParams) -> LinkKind {
    match params.kind.as_deref() {
        Some("signup") if params.has_access_token() => LinkKind::SignupConfirmed,
        Some("recovery") => LinkKind::Recovery,
        _ => LinkKind::Invalid,
    }
}

/// Per-page-load confirmation state machine.
pub struct ConfirmationHandler<N: Navigator> {
    navigator: N,
    outcome: ConfirmationOutcome,
    pending_redirect: Option<N::Pending>,
}

impl<N: Navigator> ConfirmationHandler<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator, outcome: ConfirmationOutcome::Pending, pending_redirect: None }
    }

    pub fn outcome(&self) -> &ConfirmationOutcome {
        &self.outcome
    }

    /// Whether the automatic redirect is still armed.
    pub fn redirect_scheduled(&self) -> bool {
        self.pending_redirect.is_some()
    }

    /// Classify `fragment`. Runs once; later calls return the first outcome.
    pub fn run(&mut self, fragment: &str) -> &ConfirmationOutcome {
        if !self.outcome.is_pending() {
            return &self.outcome;
        }
        self.outcome = match CallbackParams::parse(fragment) {
            Ok(params) => match classify(&params) {
                LinkKind::SignupConfirmed => {
                    self.pending_redirect = Some(self.navigator.schedule(ROOT_PATH, REDIRECT_DELAY));
                    ConfirmationOutcome::Success(SIGNUP_CONFIRMED_MESSAGE.to_owned())
                }
                LinkKind::Recovery => ConfirmationOutcome::Success(RECOVERY_MESSAGE.to_owned()),
                LinkKind::Invalid => {
                    log::warn!("confirmation link rejected: type={:?}", params.kind);
                    ConfirmationOutcome::Error(INVALID_LINK_MESSAGE.to_owned())
                }
            },
            Err(e) => {
                log::error!("error during confirmation: {e}");
                ConfirmationOutcome::Error(CONFIRMATION_FAILED_MESSAGE.to_owned())
            }
        };
        &self.outcome
    }

    /// Manual "return to start": disarms the automatic redirect, then
    /// navigates to the root immediately.
    pub fn return_to_start(&mut self) {
        if let Some(pending) = self.pending_redirect.take() {
            self.navigator.cancel(pending);
        }
        self.navigator.navigate(ROOT_PATH);
    }
}
