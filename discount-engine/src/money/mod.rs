//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are whole VND (`u64`). Percentages are applied in `Decimal` and the
//! result is rounded back to a whole amount, half away from zero.

use rust_decimal::prelude::*;

/// VND has no minor unit
const DECIMAL_PLACES: u32 = 0;

/// Convert a whole currency amount to Decimal for calculation
#[inline]
pub fn to_decimal(amount: u64) -> Decimal {
    Decimal::from(amount)
}

/// Convert Decimal back to a whole currency amount (half-up, floored at 0)
#[inline]
pub fn to_amount(value: Decimal) -> u64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO)
        .to_u64()
        .unwrap_or(u64::MAX)
}

/// `percent`% of `amount`, rounded to a whole amount
///
/// `percent` is expressed on a 0–100 scale (12.5 = 12.5%).
pub fn percent_of(amount: u64, percent: Decimal) -> u64 {
    if percent <= Decimal::ZERO {
        return 0;
    }
    to_amount(to_decimal(amount) * percent / Decimal::ONE_HUNDRED)
}

/// Whether the value has no fractional part
#[inline]
pub fn is_whole(value: Decimal) -> bool {
    value.fract().is_zero()
}

/// Subtract a discount from a price, never going below zero
#[inline]
pub fn apply_discount(price: u64, discount: u64) -> u64 {
    price.saturating_sub(discount)
}
