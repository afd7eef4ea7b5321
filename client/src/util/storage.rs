//! Persisted provider tokens.
//!
//! The browser build keeps one [`StoredSession`] as JSON in `localStorage`
//! under [`SESSION_STORAGE_KEY`](crate::net::supabase::SESSION_STORAGE_KEY).
//! Test builds without `hydrate` use a thread-local slot instead; server
//! builds keep nothing.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::supabase::StoredSession;
#[cfg(feature = "hydrate")]
use crate::net::supabase::SESSION_STORAGE_KEY;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(all(test, not(feature = "hydrate")))]
thread_local! {
    static SLOT: std::cell::RefCell<Option<StoredSession>> = const { std::cell::RefCell::new(None) };
}

/// Current stored tokens. Unreadable entries count as absent.
pub fn load_session() -> Option<StoredSession> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(all(test, not(feature = "hydrate")))]
    {
        SLOT.with(|slot| slot.borrow().clone())
    }
    #[cfg(not(any(test, feature = "hydrate")))]
    {
        None
    }
}

pub fn save_session(session: &StoredSession) {
    #[cfg(feature = "hydrate")]
    {
        let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(session)) else {
            log::warn!("could not persist session tokens");
            return;
        };
        let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
    }
    #[cfg(all(test, not(feature = "hydrate")))]
    {
        SLOT.with(|slot| *slot.borrow_mut() = Some(session.clone()));
    }
    #[cfg(not(any(test, feature = "hydrate")))]
    {
        let _ = session;
    }
}

pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
    }
    #[cfg(all(test, not(feature = "hydrate")))]
    {
        SLOT.with(|slot| slot.borrow_mut().take());
    }
}

/// Remove the stored tokens and hand them back.
pub fn take_session() -> Option<StoredSession> {
    let session = load_session();
    clear_session();
    session
}
