//! Redeemability and snapshot staleness

use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use std::fmt;

use crate::models::Coupon;

/// Why a coupon can or cannot be redeemed right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedeemStatus {
    Redeemable,
    Inactive,
    NotStarted,
    Expired,
    Exhausted,
}

impl RedeemStatus {
    pub fn is_redeemable(&self) -> bool {
        matches!(self, RedeemStatus::Redeemable)
    }

    /// Error code a caller can surface; `None` when redeemable
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            RedeemStatus::Redeemable => None,
            RedeemStatus::Inactive => Some(ErrorCode::CouponInactive),
            RedeemStatus::NotStarted => Some(ErrorCode::CouponNotStarted),
            RedeemStatus::Expired => Some(ErrorCode::CouponExpired),
            RedeemStatus::Exhausted => Some(ErrorCode::CouponExhausted),
        }
    }

    /// Error for a coupon that cannot be redeemed
    pub fn to_error(&self, coupon: &Coupon) -> Option<AppError> {
        self.error_code().map(|code| {
            AppError::new(code)
                .with_detail("couponId", coupon.id())
                .with_detail("code", coupon.code())
        })
    }
}

impl fmt::Display for RedeemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RedeemStatus::Redeemable => "REDEEMABLE",
            RedeemStatus::Inactive => "INACTIVE",
            RedeemStatus::NotStarted => "NOT_STARTED",
            RedeemStatus::Expired => "EXPIRED",
            RedeemStatus::Exhausted => "EXHAUSTED",
        };
        f.write_str(name)
    }
}

/// Redemption state of a coupon at `now` (Unix millis)
///
/// Checked in order: active flag, window start, window end, usage.
pub fn redeem_status(coupon: &Coupon, now: i64) -> RedeemStatus {
    if !coupon.active {
        RedeemStatus::Inactive
    } else if now < coupon.valid_from {
        RedeemStatus::NotStarted
    } else if now > coupon.valid_to {
        RedeemStatus::Expired
    } else if coupon.usage_count >= coupon.usage_limit {
        RedeemStatus::Exhausted
    } else {
        RedeemStatus::Redeemable
    }
}

/// Whether a coupon can be redeemed at `now`, regardless of audience
///
/// Advisory only: the backend re-checks usage when the booking commits.
pub fn is_redeemable(coupon: &Coupon, now: i64) -> bool {
    redeem_status(coupon, now).is_redeemable()
}

/// Attached to decisions made from an old catalog snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaleStateWarning {
    pub snapshot_age_ms: i64,
}

/// Warning when the snapshot is older than `stale_after_ms`
pub fn check_staleness(fetched_at: i64, now: i64, stale_after_ms: i64) -> Option<StaleStateWarning> {
    let age = now.saturating_sub(fetched_at);
    (age > stale_after_ms).then_some(StaleStateWarning {
        snapshot_age_ms: age,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::map_coupon;
    use crate::catalog::test_support::coupon_payload;

    const NOW: i64 = 1_700_000_000_000;

    fn coupon(edit: impl FnOnce(&mut shared::models::CouponPayload)) -> Coupon {
        let mut payload = coupon_payload(1);
        payload.valid_from = (NOW - 1_000).into();
        payload.valid_to = (NOW + 1_000).into();
        edit(&mut payload);
        map_coupon(payload).unwrap()
    }

    #[test]
    fn test_redeemable() {
        let coupon = coupon(|_| {});
        assert_eq!(redeem_status(&coupon, NOW), RedeemStatus::Redeemable);
        assert!(is_redeemable(&coupon, NOW));
        assert!(RedeemStatus::Redeemable.to_error(&coupon).is_none());
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let coupon = coupon(|_| {});
        assert!(is_redeemable(&coupon, NOW - 1_000));
        assert!(is_redeemable(&coupon, NOW + 1_000));
        assert_eq!(redeem_status(&coupon, NOW - 1_001), RedeemStatus::NotStarted);
        assert_eq!(redeem_status(&coupon, NOW + 1_001), RedeemStatus::Expired);
    }

    #[test]
    fn test_exhausted() {
        let coupon = coupon(|p| {
            p.usage_limit = 5;
            p.usage_count = 5;
        });
        assert_eq!(redeem_status(&coupon, NOW), RedeemStatus::Exhausted);
        assert!(!is_redeemable(&coupon, NOW));

        let err = RedeemStatus::Exhausted.to_error(&coupon).unwrap();
        assert_eq!(err.code, ErrorCode::CouponExhausted);
    }

    #[test]
    fn test_zero_limit_is_exhausted() {
        let coupon = coupon(|p| {
            p.usage_limit = 0;
            p.usage_count = 0;
        });
        assert_eq!(redeem_status(&coupon, NOW), RedeemStatus::Exhausted);
    }

    #[test]
    fn test_inactive_wins_over_other_reasons() {
        let coupon = coupon(|p| {
            p.active = false;
            p.usage_limit = 1;
            p.usage_count = 1;
        });
        assert_eq!(redeem_status(&coupon, NOW + 5_000), RedeemStatus::Inactive);
    }

    #[test]
    fn test_status_serializes_screaming() {
        assert_eq!(
            serde_json::to_string(&RedeemStatus::NotStarted).unwrap(),
            "\"NOT_STARTED\""
        );
        assert_eq!(RedeemStatus::NotStarted.to_string(), "NOT_STARTED");
    }

    #[test]
    fn test_staleness() {
        assert_eq!(check_staleness(NOW, NOW + 300_000, 300_000), None);
        assert_eq!(
            check_staleness(NOW, NOW + 300_001, 300_000),
            Some(StaleStateWarning {
                snapshot_age_ms: 300_001
            })
        );
        // Clock skew: snapshot "from the future" is fresh
        assert_eq!(check_staleness(NOW + 10, NOW, 0), None);
    }
}
