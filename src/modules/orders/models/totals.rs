use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::money::format_try;

/// Totals derived from an order draft, rounded to 2 decimal places.
///
/// Never stored on its own: it is a projection of the draft and is
/// recomputed whenever the items, the global discount or the VAT rate change.
/// It is a preview only; invoices print the totals echoed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct OrderTotals {
    /// Sum of line amounts after per-line discounts
    pub subtotal: Decimal,
    /// Amount removed by the global discount
    pub discount_amount: Decimal,
    /// VAT on the amount after the global discount
    pub vat_amount: Decimal,
    /// subtotal - discount_amount + vat_amount
    pub total: Decimal,
}

impl fmt::Display for OrderTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Subtotal: {}", format_try(self.subtotal))?;
        writeln!(f, "Discount: -{}", format_try(self.discount_amount))?;
        writeln!(f, "VAT:      {}", format_try(self.vat_amount))?;
        write!(f, "Total:    {}", format_try(self.total))
    }
}
