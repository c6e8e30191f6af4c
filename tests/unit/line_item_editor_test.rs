// Tests for the line-item list transitions
//
// The list never drops below one row, a product chosen on the last row
// appends a fresh one, and edits never fail on malformed input.

#[path = "../helpers/mod.rs"]
mod helpers;

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use helpers::*;
use order_desk::orders::services::{should_auto_grow, EditOutcome};
use order_desk::orders::{LineItem, LineItemField, LineItemList};

#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove(usize),
    Choose(usize, bool),
    Type(usize, u8, String),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        (0usize..8).prop_map(Op::Remove),
        (0usize..8, any::<bool>()).prop_map(|(i, widget)| Op::Choose(i, widget)),
        (0usize..8, 0u8..3, "[-0-9.,a-z ]{0,6}").prop_map(|(i, f, raw)| Op::Type(i, f, raw)),
    ]
}

fn field(code: u8) -> LineItemField {
    match code {
        0 => LineItemField::Quantity,
        1 => LineItemField::UnitPrice,
        _ => LineItemField::ItemDiscount,
    }
}

#[test]
fn test_new_list_has_one_default_row() {
    let list = LineItemList::new();
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0), Some(&LineItem::default()));
    assert_eq!(list.get(0).unwrap().quantity, 1);
}

#[test]
fn test_removing_the_only_row_is_refused() {
    let mut list = LineItemList::new();
    assert!(!list.remove_row(0));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_remove_keeps_other_rows_in_order() {
    let catalog = sample_catalog();
    let mut list = LineItemList::new();
    list.add_row();
    list.add_row();
    list.set_field(0, LineItemField::Quantity, "1", &catalog);
    list.set_field(1, LineItemField::Quantity, "2", &catalog);
    list.set_field(2, LineItemField::Quantity, "3", &catalog);

    assert!(list.remove_row(1));

    let quantities: Vec<i64> = list.iter().map(|item| item.quantity).collect();
    assert_eq!(quantities, vec![1, 3]);
}

#[test]
fn test_choosing_product_on_middle_row_does_not_grow() {
    let catalog = sample_catalog();
    let mut list = LineItemList::new();
    list.add_row();

    let outcome = list.set_field(0, LineItemField::Product, &GADGET.to_string(), &catalog);

    assert_eq!(outcome, EditOutcome { applied: true, grew: false });
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).unwrap().unit_price, Some(dec!(25)));
}

#[test]
fn test_unknown_product_keeps_typed_price() {
    let catalog = sample_catalog();
    let mut list = LineItemList::new();
    list.set_field(0, LineItemField::UnitPrice, "7.5", &catalog);

    list.set_field(0, LineItemField::Product, "999", &catalog);

    let row = list.get(0).unwrap();
    assert_eq!(row.product.map(|p| p.0), Some(999));
    assert_eq!(row.unit_price, Some(dec!(7.5)));
}

#[test]
fn test_out_of_range_edit_is_ignored() {
    let catalog = sample_catalog();
    let mut list = LineItemList::new();

    let outcome = list.set_field(5, LineItemField::Quantity, "9", &catalog);

    assert_eq!(outcome, EditOutcome::default());
    assert_eq!(list.len(), 1);
    assert!(!list.remove_row(5));
}

#[test]
fn test_field_coercion() {
    let catalog = sample_catalog();
    let mut list = LineItemList::new();

    list.set_field(0, LineItemField::Quantity, "0", &catalog);
    assert_eq!(list.get(0).unwrap().quantity, 1);

    list.set_field(0, LineItemField::UnitPrice, "-20", &catalog);
    assert_eq!(list.get(0).unwrap().unit_price, Some(Decimal::ZERO));

    list.set_field(0, LineItemField::UnitPrice, "", &catalog);
    assert_eq!(list.get(0).unwrap().unit_price, None);

    list.set_field(0, LineItemField::ItemDiscount, "140", &catalog);
    assert_eq!(list.get(0).unwrap().item_discount_percent, dec!(100));
}

proptest! {
    #[test]
    fn test_list_never_becomes_empty(ops in prop::collection::vec(arb_op(), 0..40)) {
        let catalog = sample_catalog();
        let mut list = LineItemList::new();

        for op in ops {
            match op {
                Op::Add => list.add_row(),
                Op::Remove(i) => { list.remove_row(i); }
                Op::Choose(i, widget) => {
                    let product = if widget { WIDGET } else { GADGET };
                    list.set_field(i, LineItemField::Product, &product.to_string(), &catalog);
                }
                Op::Type(i, f, raw) => { list.set_field(i, field(f), &raw, &catalog); }
            }
            prop_assert!(list.len() >= 1);
        }
    }

    #[test]
    fn test_edited_rows_stay_in_range(ops in prop::collection::vec(arb_op(), 0..40)) {
        let catalog = sample_catalog();
        let mut list = LineItemList::new();

        for op in ops {
            if let Op::Type(i, f, raw) = op {
                list.add_row();
                list.set_field(i % list.len(), field(f), &raw, &catalog);
            }
        }

        for item in list.iter() {
            prop_assert!(item.quantity >= 1);
            prop_assert!(item.unit_price.map_or(true, |p| p >= Decimal::ZERO));
            prop_assert!(item.item_discount_percent >= Decimal::ZERO);
            prop_assert!(item.item_discount_percent <= Decimal::ONE_HUNDRED);
        }
    }

    #[test]
    fn test_growth_only_from_product_on_last_row(
        len in 1usize..10,
        index in 0usize..10,
        set in any::<bool>(),
    ) {
        let grows = should_auto_grow(index, LineItemField::Product, set, len);
        prop_assert_eq!(grows, set && index + 1 == len);

        for other in [LineItemField::Quantity, LineItemField::UnitPrice, LineItemField::ItemDiscount] {
            prop_assert!(!should_auto_grow(index, other, set, len));
        }
    }

    #[test]
    fn test_product_on_last_row_grows_by_exactly_one(extra_rows in 0usize..6) {
        let catalog = sample_catalog();
        let mut list = LineItemList::new();
        for _ in 0..extra_rows {
            list.add_row();
        }
        let before = list.len();

        let outcome = list.set_field(before - 1, LineItemField::Product, &WIDGET.to_string(), &catalog);

        prop_assert!(outcome.grew);
        prop_assert_eq!(list.len(), before + 1);
        prop_assert_eq!(list.get(before), Some(&LineItem::default()));
    }
}
