// Live totals for the order-entry screen.
//
// Stages compose in a fixed order:
//   line net   = max(0, qty × price − qty × price × line_discount / 100)
//   subtotal   = Σ line net over complete rows
//   discount   = subtotal × global_discount / 100
//   after      = max(0, subtotal − discount)
//   vat        = after × vat_rate / 100
//   total      = after + vat
//
// Every stored value is re-clamped here even though the editor already
// normalizes input: drafts can also arrive from files or older states.
// Arithmetic saturates at `Decimal::MAX` instead of overflowing, so any
// draft yields totals. Rounding to 2 places happens once, when
// `OrderTotals` is built.

use rust_decimal::Decimal;

use crate::core::money::round_money;
use crate::core::numeric::{clamp_non_negative, clamp_percent};
use crate::modules::orders::models::{LineItem, OrderDraft, OrderTotals};

/// Compute the totals preview for a draft. Never fails.
pub fn compute_totals(draft: &OrderDraft) -> OrderTotals {
    compute_totals_for(
        draft.items.as_slice(),
        draft.global_discount_percent,
        draft.vat_rate_percent,
    )
}

/// Same as [`compute_totals`] with every input named explicitly
pub fn compute_totals_for(
    items: &[LineItem],
    global_discount_percent: Decimal,
    vat_rate_percent: Decimal,
) -> OrderTotals {
    let subtotal = items
        .iter()
        .filter_map(line_net)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let discount_amount = percent_of(subtotal, clamp_percent(global_discount_percent));
    let after_discount = clamp_non_negative(subtotal.saturating_sub(discount_amount));

    let vat_amount = percent_of(after_discount, clamp_non_negative(vat_rate_percent));
    let total = after_discount.saturating_add(vat_amount);

    OrderTotals {
        subtotal: round_money(subtotal),
        discount_amount: round_money(discount_amount),
        vat_amount: round_money(vat_amount),
        total: round_money(total),
    }
}

/// Net amount of one row after its own discount, at full precision.
/// `None` for rows that are still incomplete.
pub fn line_net(item: &LineItem) -> Option<Decimal> {
    if !item.is_complete() {
        return None;
    }
    let unit_price = item.unit_price?;

    let quantity = clamp_non_negative(Decimal::from(item.quantity));
    let gross = quantity.saturating_mul(clamp_non_negative(unit_price));
    let discount = percent_of(gross, clamp_percent(item.item_discount_percent));

    Some(clamp_non_negative(gross.saturating_sub(discount)))
}

/// `amount × percent / 100` for non-negative inputs.
///
/// Multiplies first to keep precision; when the product would overflow,
/// divides first and saturates.
fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    match amount.checked_mul(percent) {
        Some(product) => product / Decimal::ONE_HUNDRED,
        None => (amount / Decimal::ONE_HUNDRED).saturating_mul(percent),
    }
}

/// Caches the last computed totals, keyed on the inputs they depend on.
///
/// `get` recomputes only when the items, the global discount or the VAT
/// rate differ from the previous call.
#[derive(Debug, Clone, Default)]
pub struct MemoizedTotals {
    key: Option<(Vec<LineItem>, Decimal, Decimal)>,
    value: OrderTotals,
}

impl MemoizedTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, draft: &OrderDraft) -> OrderTotals {
        let unchanged = matches!(
            &self.key,
            Some((items, discount, vat))
                if items.as_slice() == draft.items.as_slice()
                    && *discount == draft.global_discount_percent
                    && *vat == draft.vat_rate_percent
        );

        if !unchanged {
            self.value = compute_totals(draft);
            self.key = Some((
                draft.items.as_slice().to_vec(),
                draft.global_discount_percent,
                draft.vat_rate_percent,
            ));
        }

        self.value
    }
}
