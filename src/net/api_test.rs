use super::*;

#[test]
fn menu_endpoint_joins_with_configured_base() {
    let config = ApiConfig::new("http://api.example.com/");
    assert_eq!(config.build_url(MENU_ENDPOINT), "http://api.example.com/api/menu");
}

#[test]
fn orders_endpoint_stays_relative_without_base() {
    let config = ApiConfig::new("");
    assert_eq!(config.build_url(ORDERS_ENDPOINT), "/api/admin/orders");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
}

#[test]
fn bearer_header_value_prefixes_token() {
    assert_eq!(bearer_header_value("tok123"), "Bearer tok123");
}
