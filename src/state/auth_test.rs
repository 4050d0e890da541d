use super::*;

#[test]
fn default_state_has_no_session() {
    assert!(!AuthState::default().is_admin());
    assert_eq!(AuthState::default().token(), None);
}

#[test]
fn non_empty_token_counts_as_admin() {
    let state = AuthState::from_token(Some("abc123".to_owned()));
    assert!(state.is_admin());
    assert_eq!(state.token(), Some("abc123"));
}

#[test]
fn missing_token_is_not_admin() {
    assert!(!AuthState::from_token(None).is_admin());
}

#[test]
fn empty_token_counts_as_absent() {
    let state = AuthState::from_token(Some(String::new()));
    assert!(!state.is_admin());
    assert_eq!(state.token(), None);
}
