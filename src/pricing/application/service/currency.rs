use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole cents, halves away from zero.
pub fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a monthly amount for display, keeping the sign of credits:
/// `"$12.50"`, `"-$3.00"`.
pub fn format_currency(amount: Decimal) -> String {
    let cents = to_cents(amount);
    if cents < Decimal::ZERO {
        format!("-${:.2}", cents.abs())
    } else {
        format!("${:.2}", cents)
    }
}
