//! Contract between the session core and the external identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Credential verification, token issuance, and session persistence all live
//! behind this trait. The core only ever extracts a display string from a
//! provider failure; it never branches on provider error codes.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use async_trait::async_trait;

use super::types::User;

/// Shown to the user for every failure that is not a provider rejection.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred";

/// Failure reported by an identity-provider call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The provider refused the request (bad credentials, duplicate email,
    /// weak password). The message is meant to be shown verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a provider answer.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider answered with a body we could not interpret.
    #[error("malformed provider response: {0}")]
    Malformed(String),

    /// The provider cannot be reached from this build or is not configured.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

impl AuthError {
    /// Whether this failure is an expected, provider-reported rejection.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Text suitable for an inline error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

/// External identity provider operations.
///
/// Futures are `?Send`: browser HTTP futures are bound to the UI thread.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Verify credentials and establish a provider session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Register an account. Success means a confirmation email was sent,
    /// not that the user is signed in.
    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<(), AuthError>;

    /// End the provider session.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Restore a prior session, if one exists.
    async fn current_user(&self) -> Result<Option<User>, AuthError>;
}
