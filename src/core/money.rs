use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places used for every presented amount
pub const MONEY_SCALE: u32 = 2;

/// Symbol appended to formatted amounts
pub const CURRENCY_SYMBOL: &str = "₺";

/// Rounds an amount to 2 decimal places, half away from zero.
///
/// Only call this at the presentation boundary; intermediate sums keep
/// full precision.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount the way the printed invoice shows it:
/// `.` groups thousands, `,` separates decimals, e.g. `1.234,56`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.width$}", rounded.abs(), width = MONEY_SCALE as usize);

    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{},{}", grouped, frac_part)
    } else {
        format!("{},{}", grouped, frac_part)
    }
}

/// `format_amount` with the currency symbol, e.g. `1.234,56₺`
pub fn format_try(amount: Decimal) -> String {
    format!("{}{}", format_amount(amount), CURRENCY_SYMBOL)
}
