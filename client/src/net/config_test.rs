use super::*;

#[test]
fn from_values_trims_trailing_slash() {
    let cfg = SupabaseConfig::from_values(Some("https://abc.supabase.co/"), Some("anon")).unwrap();
    assert_eq!(cfg.url, "https://abc.supabase.co");
    assert_eq!(cfg.anon_key, "anon");
}

#[test]
fn from_values_requires_url() {
    assert_eq!(
        SupabaseConfig::from_values(None, Some("anon")),
        Err(ConfigError::Missing { var: "SUPABASE_URL" })
    );
    assert_eq!(
        SupabaseConfig::from_values(Some("  "), Some("anon")),
        Err(ConfigError::Missing { var: "SUPABASE_URL" })
    );
}

#[test]
fn from_values_requires_anon_key() {
    assert_eq!(
        SupabaseConfig::from_values(Some("https://abc.supabase.co"), None),
        Err(ConfigError::Missing { var: "SUPABASE_ANON_KEY" })
    );
}

#[test]
fn from_values_rejects_non_http_url() {
    assert_eq!(
        SupabaseConfig::from_values(Some("abc.supabase.co"), Some("anon")),
        Err(ConfigError::InvalidUrl("abc.supabase.co".to_owned()))
    );
}
