//! Login and signup form controllers.
//!
//! Each form owns its field values plus a [`FormStatus`]. A submission is
//! split into `begin_submit` (validate and take the per-form lock) and
//! `complete` (release the lock, record the outcome) so a reactive page can
//! hold the form in a signal across the async provider call.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::identity::AuthError;

/// Shortest password the signup form will submit.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Client-side signup checks. These never reach the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupCredentials {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
}

impl SignupCredentials {
    /// Mismatch is reported before length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(())
    }
}

/// Busy flag and inline error shared by both forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub is_loading: bool,
    pub error: Option<String>,
}

impl FormStatus {
    /// Take the lock and clear the previous error. `false` if a call is
    /// already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        self.error = None;
        true
    }

    /// Release the lock, keeping `error` for display.
    pub fn finish(&mut self, error: Option<String>) {
        self.is_loading = false;
        self.error = error;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub credentials: Credentials,
    pub status: FormStatus,
}

impl LoginForm {
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        self.status.begin().then(|| self.credentials.clone())
    }

    pub fn complete(&mut self, result: Result<(), AuthError>) {
        self.status.finish(result.err().map(|e| e.user_message()));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub credentials: SignupCredentials,
    pub status: FormStatus,
    /// Set once the provider accepted the signup and sent its email.
    pub confirmation_sent: bool,
}

impl SignupForm {
    /// Validate and lock. Validation failures are recorded on the form and
    /// leave it editable.
    pub fn begin_submit(&mut self) -> Option<SignupCredentials> {
        if !self.status.begin() {
            return None;
        }
        if let Err(e) = self.credentials.validate() {
            self.status.finish(Some(e.to_string()));
            return None;
        }
        Some(self.credentials.clone())
    }

    pub fn complete(&mut self, result: Result<(), AuthError>) {
        self.confirmation_sent = result.is_ok();
        self.status.finish(result.err().map(|e| e.user_message()));
    }

    /// Leave the "check your email" panel and show the form again.
    pub fn try_again(&mut self) {
        self.confirmation_sent = false;
    }
}
