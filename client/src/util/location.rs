//! Reads of the browser's current location.
//!
//! Each call is a one-off snapshot; nothing here subscribes to navigation.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// The URL fragment without its leading `#`. Empty outside the browser.
pub fn current_fragment() -> String {
    #[cfg(feature = "hydrate")]
    {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        strip_hash(&hash).to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// The page origin (`scheme://host[:port]`), if running in a browser.
pub fn current_origin() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn strip_hash(raw: &str) -> &str {
    raw.strip_prefix('#').unwrap_or(raw)
}
