use super::*;

#[test]
fn order_count_label_singular() {
    assert_eq!(order_count_label(1), "1 order");
}

#[test]
fn order_count_label_plural_and_zero() {
    assert_eq!(order_count_label(0), "0 orders");
    assert_eq!(order_count_label(12), "12 orders");
}
