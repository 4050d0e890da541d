use super::*;

#[test]
fn format_price_cents_pads_sub_dollar_amounts() {
    assert_eq!(format_price_cents(5), "$0.05");
    assert_eq!(format_price_cents(50), "$0.50");
}

#[test]
fn format_price_cents_splits_dollars_and_cents() {
    assert_eq!(format_price_cents(1250), "$12.50");
    assert_eq!(format_price_cents(100), "$1.00");
}
