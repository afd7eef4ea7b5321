//! In-memory identity provider for state tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::net::identity::{AuthError, IdentityProvider};
use crate::net::types::User;

pub(crate) fn investigator() -> User {
    User {
        id: "u-carter".to_owned(),
        email: "carter@miskatonic.edu".to_owned(),
        name: Some("Randolph Carter".to_owned()),
    }
}

/// Scripted provider that records every call it receives.
pub(crate) struct MockProvider {
    pub existing: Result<Option<User>, AuthError>,
    pub sign_in: Result<User, AuthError>,
    pub sign_up: Result<(), AuthError>,
    pub sign_out: Result<(), AuthError>,
    pub calls: Mutex<Vec<String>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            existing: Ok(None),
            sign_in: Ok(investigator()),
            sign_up: Ok(()),
            sign_out: Ok(()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockProvider {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(op)).count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait(?Send)]
impl IdentityProvider for MockProvider {
    async fn sign_in(&self, email: &str, _password: &str) -> Result<User, AuthError> {
        self.record(format!("sign_in:{email}"));
        self.sign_in.clone()
    }

    async fn sign_up(&self, email: &str, _password: &str, name: &str) -> Result<(), AuthError> {
        self.record(format!("sign_up:{email}:{name}"));
        self.sign_up.clone()
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.record("sign_out".to_owned());
        self.sign_out.clone()
    }

    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        self.record("current_user".to_owned());
        self.existing.clone()
    }
}
