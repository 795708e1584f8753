//! Eligibility Engine
//!
//! Evaluates a catalog snapshot for one subject. Stateless: every call
//! reads an immutable snapshot and returns owned decisions.

use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use tracing::{debug, warn};

use super::calculator::{compute_discount, grant_value};
use super::matcher::is_eligible;
use super::redeem::{RedeemStatus, StaleStateWarning, check_staleness, redeem_status};
use crate::catalog::CatalogSnapshot;
use crate::core::config::{DEFAULT_STALE_AFTER_MS, EngineConfig};
use crate::membership::{MembershipDiscounts, Quote, membership_discount, quote};
use crate::models::{Coupon, DiscountInstrument, InstrumentKind, Subject};

/// Outcome for one instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub instrument_id: i64,
    pub kind: InstrumentKind,
    /// Coupon code (coupons only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub eligible: bool,
    pub redeemable: bool,
    /// Coupon discount on the base price, or the value of a bonus service
    pub discount_amount: u64,
    pub redeem_status: RedeemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<StaleStateWarning>,
}

impl Decision {
    /// Eligible and redeemable
    pub fn is_applicable(&self) -> bool {
        self.eligible && self.redeemable
    }
}

/// Eligibility engine
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    stale_after_ms: i64,
    member_discounts: MembershipDiscounts,
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self {
            stale_after_ms: DEFAULT_STALE_AFTER_MS,
            member_discounts: MembershipDiscounts::default(),
        }
    }
}

impl EligibilityEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            stale_after_ms: config.stale_after_ms,
            member_discounts: config.member_discounts,
        }
    }

    pub fn stale_after_ms(&self) -> i64 {
        self.stale_after_ms
    }

    /// Evaluate every instrument in catalog order
    pub fn evaluate(
        &self,
        subject: &Subject,
        snapshot: &CatalogSnapshot,
        base_price: u64,
        now: i64,
    ) -> Vec<Decision> {
        debug!(
            role = %subject.role,
            tier = %subject.tier,
            instruments = snapshot.len(),
            base_price,
            "Evaluating catalog snapshot"
        );

        let stale = check_staleness(snapshot.fetched_at(), now, self.stale_after_ms);
        if let Some(warning) = stale {
            warn!(
                snapshot_age_ms = warning.snapshot_age_ms,
                stale_after_ms = self.stale_after_ms,
                "Catalog snapshot is stale, redeemability is advisory"
            );
        }

        snapshot
            .instruments()
            .iter()
            .map(|instrument| self.decide(subject, instrument, base_price, now, stale))
            .collect()
    }

    /// Best applicable coupon: largest discount, first in catalog order on ties
    pub fn best_coupon(
        &self,
        subject: &Subject,
        snapshot: &CatalogSnapshot,
        base_price: u64,
        now: i64,
    ) -> Option<Decision> {
        self.select_best(subject, snapshot, base_price, now)
            .map(|(decision, _)| decision)
    }

    /// Winning decision together with the coupon it was made for
    fn select_best<'a>(
        &self,
        subject: &Subject,
        snapshot: &'a CatalogSnapshot,
        base_price: u64,
        now: i64,
    ) -> Option<(Decision, &'a Coupon)> {
        let stale = check_staleness(snapshot.fetched_at(), now, self.stale_after_ms);
        let best = snapshot
            .coupons()
            .map(|coupon| (self.decide_coupon(subject, coupon, base_price, now, stale), coupon))
            .filter(|(d, _)| d.is_applicable())
            .fold(None::<(Decision, &Coupon)>, |best, candidate| match best {
                Some(b) if b.0.discount_amount >= candidate.0.discount_amount => Some(b),
                _ => Some(candidate),
            });

        if let Some((ref decision, _)) = best {
            debug!(
                coupon_id = decision.instrument_id,
                discount = decision.discount_amount,
                "Selected best coupon"
            );
        }
        best
    }

    /// Resolve a code typed by the customer
    ///
    /// When several coupons share the code, the first applicable one wins.
    /// Fails with `CouponNotFound`, `RoleNotDiscountSubject` for hosts,
    /// `SubjectNotEligible` outside every matching audience, or the redeem
    /// status error of the first eligible match.
    pub fn apply_code(
        &self,
        subject: &Subject,
        snapshot: &CatalogSnapshot,
        code: &str,
        base_price: u64,
        now: i64,
    ) -> AppResult<Decision> {
        let matches: Vec<&Coupon> = snapshot.coupons_by_code(code).collect();
        let Some(first) = matches.first() else {
            return Err(AppError::new(ErrorCode::CouponNotFound).with_detail("code", code.trim()));
        };

        if !subject.role.is_discount_subject() {
            return Err(AppError::new(ErrorCode::RoleNotDiscountSubject)
                .with_detail("role", subject.role.as_str()));
        }

        let stale = check_staleness(snapshot.fetched_at(), now, self.stale_after_ms);
        let decisions: Vec<(Decision, &Coupon)> = matches
            .iter()
            .map(|&coupon| (self.decide_coupon(subject, coupon, base_price, now, stale), coupon))
            .collect();

        if let Some((decision, _)) = decisions.iter().find(|(d, _)| d.is_applicable()) {
            return Ok(decision.clone());
        }
        let redeem_error = decisions
            .iter()
            .filter(|(d, _)| d.eligible)
            .find_map(|(d, coupon)| d.redeem_status.to_error(coupon));
        Err(redeem_error.unwrap_or_else(|| {
            AppError::new(ErrorCode::SubjectNotEligible)
                .with_detail("couponId", first.id())
                .with_detail("tier", subject.tier.as_str())
        }))
    }

    /// Checkout quote: member discount, then the best coupon on the remainder
    pub fn quote(
        &self,
        subject: &Subject,
        snapshot: &CatalogSnapshot,
        base_price: u64,
        now: i64,
    ) -> Quote {
        let after_member = base_price.saturating_sub(membership_discount(
            base_price,
            subject.tier,
            &self.member_discounts,
        ));
        let coupon = self
            .select_best(subject, snapshot, after_member, now)
            .map(|(_, coupon)| coupon);

        quote(base_price, subject.tier, coupon, &self.member_discounts)
    }

    fn decide(
        &self,
        subject: &Subject,
        instrument: &DiscountInstrument,
        base_price: u64,
        now: i64,
        stale: Option<StaleStateWarning>,
    ) -> Decision {
        match instrument {
            DiscountInstrument::Coupon(coupon) => {
                self.decide_coupon(subject, coupon, base_price, now, stale)
            }
            DiscountInstrument::BonusService(bonus) => Decision {
                instrument_id: bonus.id(),
                kind: InstrumentKind::BonusService,
                code: None,
                eligible: is_eligible(subject, instrument),
                redeemable: true,
                discount_amount: grant_value(bonus),
                redeem_status: RedeemStatus::Redeemable,
                warning: None,
            },
        }
    }

    fn decide_coupon(
        &self,
        subject: &Subject,
        coupon: &Coupon,
        base_price: u64,
        now: i64,
        stale: Option<StaleStateWarning>,
    ) -> Decision {
        let status = redeem_status(coupon, now);
        let redeemable = status.is_redeemable();
        Decision {
            instrument_id: coupon.id(),
            kind: InstrumentKind::Coupon,
            code: Some(coupon.code().to_string()),
            eligible: coupon.audience().admits(subject.role, subject.tier),
            redeemable,
            discount_amount: compute_discount(base_price, coupon),
            redeem_status: status,
            warning: if redeemable { stale } else { None },
        }
    }

    // ── Single-instrument operations ────────────────────────────────

    pub fn is_eligible(&self, subject: &Subject, instrument: &DiscountInstrument) -> bool {
        is_eligible(subject, instrument)
    }

    pub fn compute_discount(&self, base_price: u64, coupon: &Coupon) -> u64 {
        compute_discount(base_price, coupon)
    }

    pub fn is_redeemable(&self, coupon: &Coupon, now: i64) -> bool {
        super::redeem::is_redeemable(coupon, now)
    }
}
