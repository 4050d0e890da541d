use super::*;

#[test]
fn menu_item_deserializes_without_description() {
    let item: MenuItem =
        serde_json::from_str(r#"{"id":"m1","name":"Chicken Biryani","price_cents":1250}"#)
            .expect("valid menu item json");
    assert_eq!(item.name, "Chicken Biryani");
    assert_eq!(item.description, None);
    assert_eq!(item.price_cents, 1250);
}

#[test]
fn order_round_trips_through_json() {
    let order = Order {
        id: "o7".to_owned(),
        customer_name: "Alice".to_owned(),
        status: "pending".to_owned(),
        total_cents: 3400,
    };
    let raw = serde_json::to_string(&order).expect("order serializes");
    let back: Order = serde_json::from_str(&raw).expect("order deserializes");
    assert_eq!(back, order);
}

#[test]
fn login_response_extracts_token_field() {
    let resp: AdminLoginResponse =
        serde_json::from_str(r#"{"token":"abc123"}"#).expect("valid login response json");
    assert_eq!(resp.token, "abc123");
}
