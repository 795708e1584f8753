//! Member discount and price quote
//!
//! Discounts are applied sequentially on a running price: the member
//! discount first, then the coupon on what remains. The payable amount
//! never goes below zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::MembershipTier;

use crate::eligibility::compute_discount;
use crate::models::Coupon;
use crate::money;

/// Member discount percentages per tier (NONE is always 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipDiscounts {
    pub bronze: Decimal,
    pub silver: Decimal,
    pub gold: Decimal,
}

impl Default for MembershipDiscounts {
    fn default() -> Self {
        Self {
            bronze: Decimal::from(3),
            silver: Decimal::from(5),
            gold: Decimal::from(10),
        }
    }
}

impl MembershipDiscounts {
    pub fn new(bronze: Decimal, silver: Decimal, gold: Decimal) -> Self {
        Self {
            bronze,
            silver,
            gold,
        }
    }

    pub fn rate_for(&self, tier: MembershipTier) -> Decimal {
        match tier {
            MembershipTier::None => Decimal::ZERO,
            MembershipTier::Bronze => self.bronze,
            MembershipTier::Silver => self.silver,
            MembershipTier::Gold => self.gold,
        }
    }

    /// Every rate must lie in `0..=100`
    pub fn validate(&self) -> AppResult<()> {
        for (tier, rate) in [
            (MembershipTier::Bronze, self.bronze),
            (MembershipTier::Silver, self.silver),
            (MembershipTier::Gold, self.gold),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
                return Err(AppError::with_message(
                    ErrorCode::ConfigError,
                    format!("{tier} member discount must be between 0 and 100, got {rate}"),
                )
                .with_detail("field", "memberDiscounts")
                .with_detail("tier", tier.as_str()));
            }
        }
        Ok(())
    }
}

/// Member discount for a tier, rounded to a whole amount
pub fn membership_discount(
    base_price: u64,
    tier: MembershipTier,
    rates: &MembershipDiscounts,
) -> u64 {
    money::percent_of(base_price, rates.rate_for(tier)).min(base_price)
}

/// Price breakdown shown at checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub base_price: u64,
    pub tier: MembershipTier,
    pub membership_discount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_id: Option<i64>,
    pub coupon_discount: u64,
    pub payable: u64,
}

impl Quote {
    pub fn total_discount(&self) -> u64 {
        self.membership_discount + self.coupon_discount
    }
}

/// Compose member discount and an optional coupon
///
/// The coupon is not re-checked for eligibility or redeemability here.
pub fn quote(
    base_price: u64,
    tier: MembershipTier,
    coupon: Option<&Coupon>,
    rates: &MembershipDiscounts,
) -> Quote {
    let membership_discount = membership_discount(base_price, tier, rates);
    let after_member = money::apply_discount(base_price, membership_discount);

    let coupon_discount = coupon.map_or(0, |c| compute_discount(after_member, c));
    let payable = money::apply_discount(after_member, coupon_discount);

    Quote {
        base_price,
        tier,
        membership_discount,
        coupon_id: coupon.map(Coupon::id),
        coupon_discount,
        payable,
    }
}
