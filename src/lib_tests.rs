use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND);
    assert_ne!(EXIT_SUCCESS, EXIT_RUNTIME_ERROR);
    assert_ne!(EXIT_VIOLATIONS_FOUND, EXIT_RUNTIME_ERROR);
}

#[test]
fn runtime_error_matches_clap_usage_error_code() {
    assert_eq!(EXIT_RUNTIME_ERROR, 2);
}
