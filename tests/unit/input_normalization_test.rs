// Property-based tests for keyboard input normalization
//
// Arbitrary text must always coerce to a usable value inside the field's
// range. Drafts loaded from JSON go through the same shape rules.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use order_desk::core::numeric::{
    normalize_discount, normalize_quantity, normalize_unit_price, normalize_vat_rate,
    parse_decimal, MIN_QUANTITY,
};
use order_desk::orders::OrderDraft;

proptest! {
    #[test]
    fn test_quantity_is_always_at_least_one(raw in "\\PC{0,12}") {
        prop_assert!(normalize_quantity(&raw) >= MIN_QUANTITY);
    }

    #[test]
    fn test_quantity_keeps_integer_part(whole in 1i64..100_000, frac in 0u8..100) {
        let raw = format!("{}.{:02}", whole, frac);
        prop_assert_eq!(normalize_quantity(&raw), whole);
    }

    #[test]
    fn test_discount_lands_in_percent_range(raw in "\\PC{0,12}") {
        let discount = normalize_discount(&raw);
        prop_assert!(discount >= Decimal::ZERO && discount <= Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_vat_and_price_are_never_negative(raw in "\\PC{0,12}") {
        prop_assert!(normalize_vat_rate(&raw) >= Decimal::ZERO);
        prop_assert!(normalize_unit_price(&raw).map_or(true, |p| p >= Decimal::ZERO));
    }

    #[test]
    fn test_comma_and_dot_agree(whole in 0u32..1_000_000, cents in 0u8..100) {
        let dotted = format!("{}.{:02}", whole, cents);
        let comma = format!("{},{:02}", whole, cents);
        prop_assert_eq!(parse_decimal(&dotted), parse_decimal(&comma));
        prop_assert_eq!(parse_decimal(&dotted), Some(Decimal::new(whole as i64 * 100 + cents as i64, 2)));
    }
}

#[test]
fn test_vat_has_no_upper_bound() {
    assert_eq!(normalize_vat_rate("300"), dec!(300));
}

#[test]
fn test_draft_setters_clamp_rates() {
    let mut draft = OrderDraft::new();
    draft.set_global_discount("150");
    draft.set_vat_rate("-5");

    assert_eq!(draft.global_discount_percent, dec!(100));
    assert_eq!(draft.vat_rate_percent, Decimal::ZERO);
}

#[test]
fn test_draft_json_with_no_items_gets_one_row() {
    let draft: OrderDraft = serde_json::from_str(
        r#"{"company": 1, "global_discount": "5", "vat_rate": "18", "items": []}"#,
    )
    .unwrap();

    assert_eq!(draft.items.len(), 1);
    assert_eq!(draft.vat_rate_percent, dec!(18));
}

#[test]
fn test_draft_json_empty_price_means_unset() {
    let draft: OrderDraft = serde_json::from_str(
        r#"{"company": 1, "items": [{"product": 10, "quantity": 2, "unit_price": ""}]}"#,
    )
    .unwrap();

    let row = draft.items.get(0).unwrap();
    assert_eq!(row.unit_price, None);
    assert!(!row.is_complete());
}
