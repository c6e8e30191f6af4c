// Input normalization for order-entry fields.
//
// Every function here is total: malformed keyboard input is coerced to a
// usable value instead of being rejected, so totals can refresh on each
// keystroke. The only hard validation happens at submission time.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Smallest quantity a line item can hold after editing
pub const MIN_QUANTITY: i64 = 1;

/// Parses a user-typed number.
///
/// Accepts `.` or a single `,` as the decimal separator and plain
/// scientific notation. Returns `None` for empty or unparsable input.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}

/// Clamps a percentage into [0, 100]
pub fn clamp_percent(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// Clamps a value to be at least zero
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Quantity field: integer part of the input, at least 1.
/// Unparsable input becomes 1.
pub fn normalize_quantity(raw: &str) -> i64 {
    parse_decimal(raw)
        .and_then(|d| d.trunc().to_i64())
        .filter(|q| *q >= MIN_QUANTITY)
        .unwrap_or(MIN_QUANTITY)
}

/// Unit price field: empty stays empty (`None`), anything else is
/// clamped to >= 0. Unparsable input is treated as empty.
pub fn normalize_unit_price(raw: &str) -> Option<Decimal> {
    parse_decimal(raw).map(clamp_non_negative)
}

/// Discount fields (per line and global): clamped to [0, 100],
/// unparsable input becomes 0.
pub fn normalize_discount(raw: &str) -> Decimal {
    parse_decimal(raw).map(clamp_percent).unwrap_or(Decimal::ZERO)
}

/// VAT rate: clamped to >= 0 with no ceiling, unparsable input becomes 0.
pub fn normalize_vat_rate(raw: &str) -> Decimal {
    parse_decimal(raw)
        .map(clamp_non_negative)
        .unwrap_or(Decimal::ZERO)
}
