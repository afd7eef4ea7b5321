//! Framework-independent client state.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session`, `route`, `forms`, `confirm`)
//! so pages depend on small focused models, and every rule the UI enforces can
//! be tested without a browser.

pub mod auth;
pub mod confirm;
pub mod forms;
pub mod route;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
