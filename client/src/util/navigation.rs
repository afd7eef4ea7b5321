//! Full-document navigation and delayed redirects.
//!
//! TRADE-OFFS
//! ==========
//! Navigation always replaces the document (`location.href`) rather than going
//! through the client router, matching how the identity provider lands users
//! on `/auth/confirm`. Scheduled redirects are owned handles so callers can
//! cancel them when the user navigates first.

use std::time::Duration;

/// Side-effecting navigation used by the confirmation flow.
pub trait Navigator {
    /// Handle for a redirect that has been scheduled but not yet fired.
    type Pending;

    /// Navigate to `path` immediately.
    fn navigate(&self, path: &str);

    /// Navigate to `path` once `delay` has elapsed.
    fn schedule(&self, path: &str, delay: Duration) -> Self::Pending;

    /// Prevent a scheduled redirect from firing.
    fn cancel(&self, pending: Self::Pending);
}

/// [`Navigator`] backed by `window.location`. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "hydrate")]
fn set_href(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            log::error!("navigation to {path} failed: {e:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
impl Navigator for BrowserNavigator {
    type Pending = gloo_timers::callback::Timeout;

    fn navigate(&self, path: &str) {
        set_href(path);
    }

    fn schedule(&self, path: &str, delay: Duration) -> Self::Pending {
        let path = path.to_owned();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || set_href(&path))
    }

    fn cancel(&self, pending: Self::Pending) {
        pending.cancel();
    }
}

#[cfg(not(feature = "hydrate"))]
impl Navigator for BrowserNavigator {
    type Pending = ();

    fn navigate(&self, path: &str) {
        log::debug!("navigation to {path} ignored outside the browser");
    }

    fn schedule(&self, path: &str, delay: Duration) -> Self::Pending {
        let _ = (path, delay);
    }

    fn cancel(&self, pending: Self::Pending) {
        let _ = pending;
    }
}
