//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Small presentational pieces shared by the auth screens, dashboard, and
//! confirmation page.

pub mod auth_tabs;
pub mod loading_spinner;
