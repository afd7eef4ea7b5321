//! Shared DTOs for the identity boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated investigator as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned user identifier (UUID string).
    pub id: String,
    /// Account email address.
    pub email: String,
    /// Display name captured at signup, if any.
    pub name: Option<String>,
}

impl User {
    /// Name used in greetings: the display name when set, otherwise the local
    /// part of the email address.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or_default(),
        }
    }
}
