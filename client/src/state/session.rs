//! Process-wide session container backed by an external identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms call `sign_in`/`sign_up`/`sign_out`; the app root subscribes once and
//! mirrors every change into a reactive signal for the view router. The
//! manager is a cheap cloneable handle, injected through context rather than
//! reached as an ambient global.
//!
//! ERROR HANDLING
//! ==============
//! Provider rejections are logged at warn and returned for display.
//! Everything else (transport, malformed answers, unconfigured provider) is
//! logged at error and returned; callers show the generic message. No path
//! leaves `loading` stuck or panics.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::net::identity::{AuthError, IdentityProvider};
use crate::state::auth::AuthState;

type Observer = Box<dyn Fn(&AuthState) + Send + Sync>;

/// Token returned by [`SessionManager::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

struct Inner<P> {
    provider: P,
    state: Mutex<AuthState>,
    observers: Mutex<Observers>,
}

/// Owner of the current [`AuthState`].
///
/// Observers run synchronously after each mutation, in subscription order,
/// and must not subscribe or unsubscribe from inside the callback.
pub struct SessionManager<P> {
    inner: Arc<Inner<P>>,
}

impl<P> Clone for SessionManager<P> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<P> SessionManager<P> {
    /// New manager in the bootstrap state (`loading`, no user).
    pub fn new(provider: P) -> Self {
        Self {
            inner: Arc::new(Inner {
                provider,
                state: Mutex::new(AuthState::default()),
                observers: Mutex::new(Observers::default()),
            }),
        }
    }

    pub fn provider(&self) -> &P {
        &self.inner.provider
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> AuthState {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Register `observer` for every subsequent state change.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        let mut observers = self.inner.observers.lock().unwrap_or_else(PoisonError::into_inner);
        let id = SubscriptionId(observers.next_id);
        observers.next_id += 1;
        observers.entries.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.inner.observers.lock().unwrap_or_else(PoisonError::into_inner);
        let before = observers.entries.len();
        observers.entries.retain(|(entry_id, _)| *entry_id != id);
        observers.entries.len() != before
    }

    fn update(&self, mutate: impl FnOnce(&mut AuthState)) {
        let next = {
            let mut state = self.inner.state.lock().unwrap_or_else(PoisonError::into_inner);
            mutate(&mut state);
            state.clone()
        };
        let observers = self.inner.observers.lock().unwrap_or_else(PoisonError::into_inner);
        for (_, observer) in &observers.entries {
            observer(&next);
        }
    }
}

impl<P: IdentityProvider> SessionManager<P> {
    /// Resolve the initial session check. Always leaves `loading` false.
    pub async fn bootstrap(&self) {
        let user = match self.inner.provider.current_user().await {
            Ok(user) => user,
            Err(e) => {
                log::warn!("session restore failed: {e}");
                None
            }
        };
        if let Some(user) = &user {
            log::info!("restored session for {}", user.id);
        }
        self.update(|state| *state = AuthState::resolved(user));
    }

    /// Sign in with email and password. On success the user becomes present.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        match self.inner.provider.sign_in(email, password).await {
            Ok(user) => {
                log::info!("signed in {}", user.id);
                self.update(|state| state.user = Some(user));
                Ok(())
            }
            Err(e) => Err(report("sign in", e)),
        }
    }

    /// Register a new account. Success means a confirmation email is on its
    /// way; the session's user is left untouched.
    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<(), AuthError> {
        self.inner
            .provider
            .sign_up(email, password, name)
            .await
            .inspect(|()| log::info!("confirmation email requested for {email}"))
            .map_err(|e| report("sign up", e))
    }

    /// End the session. On failure the user stays signed in.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        match self.inner.provider.sign_out().await {
            Ok(()) => {
                self.update(|state| state.user = None);
                Ok(())
            }
            Err(e) => Err(report("sign out", e)),
        }
    }
}

fn report(operation: &str, err: AuthError) -> AuthError {
    if err.is_rejection() {
        log::warn!("{operation} rejected: {err}");
    } else {
        log::error!("{operation} failed: {err}");
    }
    err
}
