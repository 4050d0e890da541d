use super::*;

#[test]
fn strips_single_trailing_slash_from_base() {
    let config = ApiConfig::new("http://api.example.com/");
    assert_eq!(config.build_url("users"), "http://api.example.com/users");
}

#[test]
fn keeps_existing_leading_slash_on_endpoint() {
    let config = ApiConfig::new("http://api.example.com");
    assert_eq!(config.build_url("/users"), "http://api.example.com/users");
}

#[test]
fn empty_base_yields_relative_endpoint() {
    let config = ApiConfig::new("");
    assert_eq!(config.build_url("users"), "/users");
    assert_eq!(config.build_url("/users"), "/users");
}

#[test]
fn junction_never_doubles_or_drops_separator() {
    for base in ["http://api.example.com", "http://api.example.com/"] {
        for endpoint in ["orders", "/orders"] {
            let url = ApiConfig::new(base).build_url(endpoint);
            assert_eq!(url, "http://api.example.com/orders");
        }
    }
}

#[test]
fn repeated_calls_return_identical_strings() {
    let config = ApiConfig::new("https://shop.example");
    assert_eq!(config.build_url("api/menu"), config.build_url("api/menu"));
}

#[test]
fn endpoint_is_not_validated_or_encoded() {
    let config = ApiConfig::new("http://api.example.com");
    assert_eq!(
        config.build_url("/menu?category=desserts&page=2"),
        "http://api.example.com/menu?category=desserts&page=2"
    );
}

#[test]
fn only_one_trailing_slash_is_stripped() {
    let config = ApiConfig::new("http://api.example.com//");
    assert_eq!(config.build_url("users"), "http://api.example.com//users");
}

#[test]
fn default_config_is_same_origin() {
    assert_eq!(ApiConfig::default(), ApiConfig::new(""));
}
