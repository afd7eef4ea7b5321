//! Identity-provider configuration baked in at build time.
//!
//! The browser bundle has no process environment, so `SUPABASE_URL` and
//! `SUPABASE_ANON_KEY` are captured by `option_env!` when the crate compiles.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required build-time variable was absent or blank.
    #[error("missing config: {var} not set at build time")]
    Missing { var: &'static str },

    /// The project URL does not look like an HTTP(S) origin.
    #[error("invalid SUPABASE_URL: {0}")]
    InvalidUrl(String),
}

/// Connection details for the hosted Supabase project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project origin without a trailing slash, e.g. `https://abc.supabase.co`.
    pub url: String,
    /// Public anon key sent as the `apikey` header.
    pub anon_key: String,
}

impl SupabaseConfig {
    /// Build config from the values captured at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    /// Validate raw values.
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = non_blank(url).ok_or(ConfigError::Missing { var: "SUPABASE_URL" })?;
        let anon_key = non_blank(anon_key).ok_or(ConfigError::Missing { var: "SUPABASE_ANON_KEY" })?;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl(url.to_owned()));
        }
        Ok(Self { url: url.trim_end_matches('/').to_owned(), anon_key: anon_key.to_owned() })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
