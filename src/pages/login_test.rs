use super::*;

#[test]
fn login_failed_info_includes_cause() {
    assert_eq!(login_failed_info("login failed: 401"), "Login failed: login failed: 401");
}
