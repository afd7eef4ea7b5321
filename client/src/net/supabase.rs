//! Supabase (GoTrue) implementation of [`IdentityProvider`].
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! token kept in `localStorage`.
//! Server-side (SSR): every call reports [`AuthError::Unavailable`]; auth is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! 4xx answers become [`AuthError::Rejected`] carrying the provider's own
//! message. Transport failures, 5xx answers, and undecodable bodies are kept
//! distinct so the session core can log them and show a generic message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::config::SupabaseConfig;
use super::identity::{AuthError, IdentityProvider};
use super::types::User;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::confirm::CallbackParams;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::route::CONFIRM_PATH;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::storage;

/// `localStorage` key holding the serialized [`StoredSession`].
pub const SESSION_STORAGE_KEY: &str = "arkham.auth.session";

/// Tokens persisted between page loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct WireUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: WireMetadata,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Default, Deserialize)]
struct WireMetadata {
    #[serde(default)]
    name: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
impl From<WireUser> for User {
    fn from(wire: WireUser) -> Self {
        Self { id: wire.id, email: wire.email.unwrap_or_default(), name: wire.user_metadata.name }
    }
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    user: WireUser,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Default, Deserialize)]
struct WireError {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn token_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/token?grant_type=password")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(base: &str, origin: Option<&str>) -> String {
    let endpoint = format!("{base}/auth/v1/signup");
    let Some(origin) = origin else {
        return endpoint;
    };
    let target = format!("{}{CONFIRM_PATH}", origin.trim_end_matches('/'));
    match serde_urlencoded::to_string(&[("redirect_to", target.as_str())]) {
        Ok(query) => format!("{endpoint}?{query}"),
        Err(_) => endpoint,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/user")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Pull a display message out of a GoTrue error body.
#[cfg(any(test, feature = "hydrate"))]
fn provider_error_message(status: u16, body: &str) -> String {
    let wire: WireError = serde_json::from_str(body).unwrap_or_default();
    [wire.msg, wire.error_description, wire.message, wire.error]
        .into_iter()
        .flatten()
        .find(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}

/// Map a non-success HTTP answer to an [`AuthError`].
#[cfg(any(test, feature = "hydrate"))]
fn failure_for_status(status: u16, body: &str) -> AuthError {
    if (400..500).contains(&status) {
        AuthError::Rejected(provider_error_message(status, body))
    } else {
        AuthError::Transport(format!("provider answered {status}"))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_token_response(body: &str) -> Result<(User, StoredSession), AuthError> {
    let resp: TokenResponse = serde_json::from_str(body).map_err(|e| AuthError::Malformed(e.to_string()))?;
    let session = StoredSession { access_token: resp.access_token, refresh_token: resp.refresh_token };
    Ok((resp.user.into(), session))
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_user(body: &str) -> Result<User, AuthError> {
    serde_json::from_str::<WireUser>(body)
        .map(User::from)
        .map_err(|e| AuthError::Malformed(e.to_string()))
}

/// Tokens the provider appended to a confirmation redirect, if any.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_fragment(fragment: &str) -> Option<StoredSession> {
    let params = CallbackParams::parse(fragment).ok()?;
    let access_token = params.access_token.filter(|t| !t.is_empty())?;
    Some(StoredSession { access_token, refresh_token: params.refresh_token })
}

/// 401 on logout means the token had already expired.
#[cfg(any(test, feature = "hydrate"))]
fn logout_result(status: u16, body: &str) -> Result<(), AuthError> {
    if (200..300).contains(&status) || status == 401 {
        Ok(())
    } else {
        Err(failure_for_status(status, body))
    }
}

/// Drop the stored tokens, then let `send` revoke them with the provider.
/// `send` answers with the HTTP status and body. The local tokens are gone
/// whatever it reports.
#[cfg(any(test, feature = "hydrate"))]
async fn revoke_stored<F, Fut>(send: F) -> Result<(), AuthError>
where
    F: FnOnce(StoredSession) -> Fut,
    Fut: std::future::Future<Output = Result<(u16, String), AuthError>>,
{
    let Some(session) = storage::take_session() else {
        return Ok(());
    };
    let (status, body) = send(session).await?;
    logout_result(status, &body)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable_on_server() -> AuthError {
    AuthError::Unavailable("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> AuthError {
    AuthError::Transport(err.to_string())
}

/// Identity provider backed by a hosted Supabase project.
#[derive(Debug, Clone, Default)]
pub struct SupabaseProvider {
    config: Option<SupabaseConfig>,
}

impl SupabaseProvider {
    pub fn new(config: SupabaseConfig) -> Self {
        Self { config: Some(config) }
    }

    /// Provider configured from build-time variables. A missing configuration
    /// is logged and leaves the provider in a permanently unavailable state.
    pub fn from_build_env() -> Self {
        match SupabaseConfig::from_build_env() {
            Ok(config) => Self::new(config),
            Err(e) => {
                log::warn!("identity provider disabled: {e}");
                Self::default()
            }
        }
    }

    fn config(&self) -> Result<&SupabaseConfig, AuthError> {
        self.config
            .as_ref()
            .ok_or_else(|| AuthError::Unavailable("SUPABASE_URL / SUPABASE_ANON_KEY not configured".to_owned()))
    }
}

#[async_trait(?Send)]
impl IdentityProvider for SupabaseProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let config = self.config()?;
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let resp = gloo_net::http::Request::post(&token_endpoint(&config.url))
                .header("apikey", &config.anon_key)
                .json(&payload)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            let body = resp.text().await.map_err(transport)?;
            if !resp.ok() {
                return Err(failure_for_status(resp.status(), &body));
            }
            let (user, session) = parse_token_response(&body)?;
            storage::save_session(&session);
            Ok(user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, email, password);
            Err(unavailable_on_server())
        }
    }

    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<(), AuthError> {
        let config = self.config()?;
        #[cfg(feature = "hydrate")]
        {
            let origin = crate::util::location::current_origin();
            let payload = serde_json::json!({
                "email": email,
                "password": password,
                "data": { "name": name },
            });
            let resp = gloo_net::http::Request::post(&signup_endpoint(&config.url, origin.as_deref()))
                .header("apikey", &config.anon_key)
                .json(&payload)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                let body = resp.text().await.unwrap_or_default();
                return Err(failure_for_status(resp.status(), &body));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, email, password, name);
            Err(unavailable_on_server())
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let config = self.config()?;
        #[cfg(feature = "hydrate")]
        {
            revoke_stored(|session| async move {
                let resp = gloo_net::http::Request::post(&logout_endpoint(&config.url))
                    .header("apikey", &config.anon_key)
                    .header("Authorization", &bearer(&session.access_token))
                    .send()
                    .await
                    .map_err(transport)?;
                let body = if resp.ok() { String::new() } else { resp.text().await.unwrap_or_default() };
                Ok((resp.status(), body))
            })
            .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = config;
            Err(unavailable_on_server())
        }
    }

    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        let config = self.config()?;
        #[cfg(feature = "hydrate")]
        {
            if let Some(session) = session_from_fragment(&crate::util::location::current_fragment()) {
                log::debug!("adopting session from confirmation redirect");
                storage::save_session(&session);
            }
            let Some(session) = storage::load_session() else {
                return Ok(None);
            };
            let resp = gloo_net::http::Request::get(&user_endpoint(&config.url))
                .header("apikey", &config.anon_key)
                .header("Authorization", &bearer(&session.access_token))
                .send()
                .await
                .map_err(transport)?;
            if matches!(resp.status(), 401 | 403) {
                storage::clear_session();
                return Ok(None);
            }
            let body = resp.text().await.map_err(transport)?;
            if !resp.ok() {
                return Err(failure_for_status(resp.status(), &body));
            }
            parse_user(&body).map(Some)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = config;
            Err(unavailable_on_server())
        }
    }
}
