use super::*;

#[test]
fn renders_when_session_token_present() {
    let state = AuthState::from_token(Some("tok".to_owned()));
    assert_eq!(evaluate(&state), GuardOutcome::Render);
}

#[test]
fn redirects_when_no_token_stored() {
    assert_eq!(evaluate(&AuthState::default()), GuardOutcome::RedirectToLogin);
}

#[test]
fn redirects_when_stored_token_is_empty() {
    let state = AuthState::from_token(Some(String::new()));
    assert_eq!(evaluate(&state), GuardOutcome::RedirectToLogin);
}

#[test]
fn login_destination_is_fixed() {
    assert_eq!(ADMIN_LOGIN_PATH, "/admin/login");
}
