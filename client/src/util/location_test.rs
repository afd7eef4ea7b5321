use super::*;

#[test]
fn strip_hash_removes_single_leading_marker() {
    assert_eq!(strip_hash("#type=signup"), "type=signup");
    assert_eq!(strip_hash("type=signup"), "type=signup");
    assert_eq!(strip_hash("##x"), "#x");
    assert_eq!(strip_hash(""), "");
}

#[test]
fn server_build_has_no_fragment_or_origin() {
    #[cfg(not(feature = "hydrate"))]
    {
        assert_eq!(current_fragment(), "");
        assert_eq!(current_origin(), None);
    }
}
