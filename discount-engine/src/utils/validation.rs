//! Input validation helpers
//!
//! Field checks shared by the catalog mapping functions. Each helper
//! returns the first problem it finds for its field.

use rust_decimal::Decimal;
use shared::models::DiscountKind;

use crate::core::error::ValidationError;
use crate::money;

// ── Limits ──────────────────────────────────────────────────────────

/// Coupon codes are typed by customers and printed on vouchers
pub const MAX_COUPON_CODE_LEN: usize = 64;

// ── Field validators ────────────────────────────────────────────────

/// Validate a coupon code: non-empty, `[A-Za-z0-9-_]`, at most 64 chars.
///
/// Surrounding whitespace is trimmed by the caller; embedded whitespace is rejected.
pub fn validate_coupon_code(code: &str) -> Result<(), ValidationError> {
    let valid = !code.is_empty()
        && code.len() <= MAX_COUPON_CODE_LEN
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(ValidationError::InvalidCouponCode {
            code: code.to_string(),
        });
    }
    Ok(())
}

/// Validate a discount value against its kind
pub fn validate_discount_value(kind: DiscountKind, value: Decimal) -> Result<(), ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveDiscount { value });
    }
    match kind {
        DiscountKind::Percent if value > Decimal::ONE_HUNDRED => {
            Err(ValidationError::PercentOutOfRange { value })
        }
        DiscountKind::Amount if !money::is_whole(value) => {
            Err(ValidationError::FractionalAmount { value })
        }
        _ => Ok(()),
    }
}

/// Validate an inclusive validity window
pub fn validate_validity_window(valid_from: i64, valid_to: i64) -> Result<(), ValidationError> {
    if valid_from > valid_to {
        return Err(ValidationError::InvalidValidityWindow {
            from: valid_from,
            to: valid_to,
        });
    }
    Ok(())
}

/// Validate redemption counters
pub fn validate_usage(usage_count: u32, usage_limit: u32) -> Result<(), ValidationError> {
    if usage_count > usage_limit {
        return Err(ValidationError::UsageExceedsLimit {
            count: usage_count,
            limit: usage_limit,
        });
    }
    Ok(())
}
