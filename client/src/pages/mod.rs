//! Page modules for the screens the view router can select.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its screen-scoped orchestration (form signals, provider
//! calls) and delegates the rules to `state`.

pub mod confirm;
pub mod dashboard;
pub mod login;
pub mod signup;
