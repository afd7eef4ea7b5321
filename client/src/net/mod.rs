//! Network-facing modules: identity-provider boundary and its Supabase adapter.
//!
//! DESIGN
//! ======
//! `identity` defines the contract the session core depends on; `supabase`
//! is the only module that knows about HTTP, tokens, or browser storage.

pub mod config;
pub mod identity;
pub mod supabase;
pub mod types;
