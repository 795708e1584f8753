//! Discount Calculator
//!
//! Amount a coupon takes off a base price. Uses rust_decimal for the
//! percentage math; results are whole currency amounts.

use shared::models::DiscountKind;

use crate::models::{BonusService, Coupon};
use crate::money;

/// Discount a coupon grants on `base_price`
///
/// PERCENT rounds half-up, AMOUNT is capped; either way the result never
/// exceeds `base_price`. Eligibility, activity, expiry and usage are not
/// considered.
pub fn compute_discount(base_price: u64, coupon: &Coupon) -> u64 {
    let discount = match coupon.discount_kind {
        DiscountKind::Percent => money::percent_of(base_price, coupon.discount_value),
        DiscountKind::Amount => money::to_amount(coupon.discount_value),
    };
    discount.min(base_price)
}

/// Value of a bonus service grant (the linked service's full price)
pub fn grant_value(bonus: &BonusService) -> u64 {
    bonus.price
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{amount_coupon, percent_coupon};
    use rust_decimal::Decimal;

    #[test]
    fn test_percent_discount() {
        let coupon = percent_coupon(1, Decimal::from(10));
        assert_eq!(compute_discount(250_000, &coupon), 25_000);
    }

    #[test]
    fn test_fractional_percent_rounds_half_up() {
        let coupon = percent_coupon(1, Decimal::new(125, 1));
        // 12.5% of 99_900 = 12_487.5
        assert_eq!(compute_discount(99_900, &coupon), 12_488);
    }

    #[test]
    fn test_full_percent_equals_price() {
        let coupon = percent_coupon(1, Decimal::ONE_HUNDRED);
        assert_eq!(compute_discount(480_000, &coupon), 480_000);
    }

    #[test]
    fn test_amount_capped_at_price() {
        let coupon = amount_coupon(1, Decimal::from(50_000));
        assert_eq!(compute_discount(30_000, &coupon), 30_000);
        assert_eq!(compute_discount(80_000, &coupon), 50_000);
    }

    #[test]
    fn test_discount_never_exceeds_price() {
        let coupons = [
            percent_coupon(1, Decimal::new(1, 2)),
            percent_coupon(2, Decimal::new(999, 1)),
            percent_coupon(3, Decimal::ONE_HUNDRED),
            amount_coupon(4, Decimal::ONE),
            amount_coupon(5, Decimal::from(1_000_000_000)),
        ];
        for price in [0, 1, 7, 999, 250_000, 12_345_678] {
            for coupon in &coupons {
                assert!(compute_discount(price, coupon) <= price);
            }
        }
    }

    #[test]
    fn test_zero_price() {
        assert_eq!(compute_discount(0, &percent_coupon(1, Decimal::from(10))), 0);
        assert_eq!(compute_discount(0, &amount_coupon(1, Decimal::from(10))), 0);
    }
}
