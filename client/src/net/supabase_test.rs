use super::*;

const BASE: &str = "https://abc.supabase.co";

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(token_endpoint(BASE), "https://abc.supabase.co/auth/v1/token?grant_type=password");
    assert_eq!(logout_endpoint(BASE), "https://abc.supabase.co/auth/v1/logout");
    assert_eq!(user_endpoint(BASE), "https://abc.supabase.co/auth/v1/user");
}

#[test]
fn signup_endpoint_redirects_to_confirm_route() {
    assert_eq!(
        signup_endpoint(BASE, Some("https://app.test/")),
        "https://abc.supabase.co/auth/v1/signup?redirect_to=https%3A%2F%2Fapp.test%2Fauth%2Fconfirm"
    );
}

#[test]
fn signup_endpoint_without_origin_has_no_redirect() {
    assert_eq!(signup_endpoint(BASE, None), "https://abc.supabase.co/auth/v1/signup");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("tok"), "Bearer tok");
}

#[test]
fn provider_error_message_prefers_msg() {
    let body = r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#;
    assert_eq!(provider_error_message(400, body), "Invalid login credentials");
}

#[test]
fn provider_error_message_reads_legacy_error_description() {
    let body = r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#;
    assert_eq!(provider_error_message(400, body), "Email not confirmed");
}

#[test]
fn provider_error_message_falls_back_to_status() {
    assert_eq!(provider_error_message(422, "not json"), "request failed: 422");
    assert_eq!(provider_error_message(422, r#"{"msg":"  "}"#), "request failed: 422");
}

#[test]
fn client_errors_are_rejections_and_server_errors_are_transport() {
    let body = r#"{"msg":"User already registered"}"#;
    assert_eq!(failure_for_status(422, body), AuthError::Rejected("User already registered".to_owned()));
    assert_eq!(failure_for_status(503, body), AuthError::Transport("provider answered 503".to_owned()));
}

#[test]
fn parse_token_response_extracts_user_and_tokens() {
    let body = r#"{
        "access_token": "at",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "rt",
        "user": {
            "id": "u1",
            "email": "carter@miskatonic.edu",
            "user_metadata": { "name": "Randolph" }
        }
    }"#;
    let (user, session) = parse_token_response(body).unwrap();
    assert_eq!(
        user,
        User { id: "u1".to_owned(), email: "carter@miskatonic.edu".to_owned(), name: Some("Randolph".to_owned()) }
    );
    assert_eq!(session, StoredSession { access_token: "at".to_owned(), refresh_token: Some("rt".to_owned()) });
}

#[test]
fn parse_token_response_rejects_missing_user() {
    let err = parse_token_response(r#"{"access_token":"at"}"#).unwrap_err();
    assert!(matches!(err, AuthError::Malformed(_)));
}

#[test]
fn parse_user_tolerates_missing_metadata() {
    let user = parse_user(r#"{"id":"u2","email":"a@b.com"}"#).unwrap();
    assert_eq!(user.name, None);
    assert_eq!(user.email, "a@b.com");
}

#[test]
fn session_from_fragment_adopts_confirmation_tokens() {
    let session = session_from_fragment("access_token=at&refresh_token=rt&type=signup").unwrap();
    assert_eq!(session, StoredSession { access_token: "at".to_owned(), refresh_token: Some("rt".to_owned()) });
}

#[test]
fn session_from_fragment_ignores_missing_or_empty_token() {
    assert_eq!(session_from_fragment(""), None);
    assert_eq!(session_from_fragment("type=recovery"), None);
    assert_eq!(session_from_fragment("access_token=&type=signup"), None);
}

#[test]
fn unconfigured_provider_reports_unavailable() {
    let provider = SupabaseProvider::default();
    let err = futures::executor::block_on(provider.current_user()).unwrap_err();
    assert!(matches!(err, AuthError::Unavailable(_)));
}

#[test]
fn session_from_fragment_takes_first_repeated_token() {
    let session = session_from_fragment("access_token=first&type=signup&access_token=second").unwrap();
    assert_eq!(session.access_token, "first");
}

// =============================================================
// Sign-out
// =============================================================

fn stored(token: &str) {
    storage::save_session(&StoredSession { access_token: token.to_owned(), refresh_token: None });
}

#[test]
fn logout_accepts_success_and_expired_token() {
    assert_eq!(logout_result(204, ""), Ok(()));
    assert_eq!(logout_result(401, r#"{"msg":"invalid JWT"}"#), Ok(()));
    assert_eq!(logout_result(500, ""), Err(AuthError::Transport("provider answered 500".to_owned())));
}

#[test]
fn revoke_sends_stored_bearer_token() {
    stored("at-out");
    let result = futures::executor::block_on(revoke_stored(|session| async move {
        assert_eq!(session.access_token, "at-out");
        Ok((204, String::new()))
    }));
    assert_eq!(result, Ok(()));
    assert_eq!(storage::load_session(), None);
}

#[test]
fn revoke_discards_tokens_when_request_fails() {
    stored("at-offline");
    let result = futures::executor::block_on(revoke_stored(|_| async {
        Err::<(u16, String), _>(AuthError::Transport("offline".to_owned()))
    }));
    assert!(matches!(result, Err(AuthError::Transport(_))));
    assert_eq!(storage::load_session(), None);
}

#[test]
fn revoke_discards_tokens_when_provider_errors() {
    stored("at-5xx");
    let result = futures::executor::block_on(revoke_stored(|_| async { Ok((503, String::new())) }));
    assert!(result.is_err());
    assert_eq!(storage::load_session(), None);
}

#[test]
fn revoke_without_stored_tokens_skips_request() {
    storage::clear_session();
    let mut sent = false;
    let result = futures::executor::block_on(revoke_stored(|_| {
        sent = true;
        async { Ok((204, String::new())) }
    }));
    assert_eq!(result, Ok(()));
    assert!(!sent);
}
