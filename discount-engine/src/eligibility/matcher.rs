//! Audience matching
//!
//! Decides whether a subject falls within an instrument's audience.

use crate::models::{DiscountInstrument, Subject};

/// Whether the instrument's audience targets the subject's role and tier
///
/// Hosts and untargeted roles are never eligible.
pub fn is_eligible(subject: &Subject, instrument: &DiscountInstrument) -> bool {
    instrument.audience().admits(subject.role, subject.tier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{audience, bonus_service, coupon_for};
    use shared::models::{MembershipTier, Role, TierChoice};

    #[test]
    fn test_agency_only_never_matches_tourist() {
        let instrument: DiscountInstrument = coupon_for(audience(Some(&[TierChoice::All]), None)).into();

        for tier in MembershipTier::ALL {
            assert!(!is_eligible(&Subject::tourist(tier), &instrument));
        }
    }

    #[test]
    fn test_all_matches_every_tier() {
        let instrument: DiscountInstrument = coupon_for(audience(Some(&[TierChoice::All]), None)).into();

        for tier in MembershipTier::ALL {
            assert!(is_eligible(&Subject::agency(tier), &instrument));
        }
    }

    #[test]
    fn test_specific_tier_matches_exactly() {
        let instrument: DiscountInstrument = coupon_for(audience(
            None,
            Some(&[TierChoice::Tier(MembershipTier::Silver)]),
        ))
        .into();

        assert!(!is_eligible(&Subject::tourist(MembershipTier::None), &instrument));
        assert!(!is_eligible(&Subject::tourist(MembershipTier::Bronze), &instrument));
        assert!(is_eligible(&Subject::tourist(MembershipTier::Silver), &instrument));
        assert!(!is_eligible(&Subject::tourist(MembershipTier::Gold), &instrument));
    }

    #[test]
    fn test_host_is_never_eligible() {
        let everyone = audience(Some(&[TierChoice::All]), Some(&[TierChoice::All]));
        let coupon: DiscountInstrument = coupon_for(everyone.clone()).into();
        let bonus = bonus_service(9, 100_000, everyone);

        for tier in MembershipTier::ALL {
            let host = Subject::new(Role::Host, tier);
            assert!(!is_eligible(&host, &coupon));
            assert!(!is_eligible(&host, &bonus));
        }
    }

    #[test]
    fn test_bonus_service_uses_its_audience() {
        let bonus = bonus_service(
            3,
            150_000,
            audience(Some(&[TierChoice::Tier(MembershipTier::Gold)]), None),
        );

        assert!(is_eligible(&Subject::agency(MembershipTier::Gold), &bonus));
        assert!(!is_eligible(&Subject::agency(MembershipTier::Silver), &bonus));
        assert!(!is_eligible(&Subject::tourist(MembershipTier::Gold), &bonus));
    }
}
