//! End-to-end evaluation of catalog payloads
//!
//! Payloads are written the way the backend sends them (camelCase and the
//! older PascalCase shape) and go through the same mapping boundary as
//! production callers.

use discount_engine::{
    CatalogSnapshot, EligibilityEngine, EngineConfig, InstrumentKind, RedeemStatus,
    SessionContext, Subject, map_coupon,
};
use shared::models::{CatalogPayload, CouponPayload, MembershipTier, Role};

const NOW: i64 = 1_717_200_000_000; // 2024-06-01T00:00:00Z

fn catalog_json() -> &'static str {
    r#"{
        "fetchedAt": "2024-06-01T00:00:00Z",
        "instruments": [
            {
                "type": "COUPON",
                "id": 101,
                "code": "AGENCY-ALL",
                "discountKind": "PERCENT",
                "discountValue": 10,
                "usageLimit": 100,
                "usageCount": 4,
                "validFrom": "2024-01-01",
                "validTo": "2024-12-31",
                "audience": {"forAgency": true, "agencyTiers": ["SILVER", "ALL"]}
            },
            {
                "type": "COUPON",
                "id": 102,
                "code": "TOURIST_SILVER",
                "discountKind": "AMOUNT",
                "discountValue": 50000,
                "usageLimit": 20,
                "validFrom": 1704067200000,
                "validTo": "2024-12-31T23:59:59+07:00",
                "audience": {"forTourist": true, "touristTiers": ["ALL", "silver"]}
            },
            {
                "type": "COUPON",
                "Id": 103,
                "Code": "SOLD-OUT",
                "DiscountKind": "Percent",
                "DiscountValue": 50,
                "UsageLimit": 5,
                "UsageCount": 5,
                "ValidFrom": 0,
                "ValidTo": 4102444800000,
                "Audience": {"ForTourist": true, "TouristTiers": ["ALL"], "ForAgency": true, "AgencyTiers": ["ALL"]}
            },
            {
                "type": "BONUS_SERVICE",
                "id": 201,
                "linkedServiceId": 9001,
                "price": 120000,
                "audience": {"forTourist": true, "touristTiers": ["GOLD"]}
            },
            {
                "type": "COUPON",
                "id": 104,
                "code": "BROKEN",
                "discountKind": "PERCENT",
                "discountValue": 10,
                "usageLimit": 1,
                "validFrom": 0,
                "validTo": 1,
                "audience": {"forAgency": true, "agencyTiers": [], "forTourist": false}
            }
        ]
    }"#
}

fn snapshot() -> CatalogSnapshot {
    let payload: CatalogPayload = serde_json::from_str(catalog_json()).unwrap();
    let mapped = CatalogSnapshot::from_payload(payload, NOW).unwrap();

    assert_eq!(mapped.rejected.len(), 1);
    assert_eq!(mapped.rejected[0].instrument_id, Some(104));
    assert_eq!(mapped.rejected[0].errors.fields(), vec!["agencyTiers"]);

    mapped.snapshot
}

fn decision_ids(decisions: &[discount_engine::Decision], eligible: bool) -> Vec<i64> {
    decisions
        .iter()
        .filter(|d| d.eligible == eligible)
        .map(|d| d.instrument_id)
        .collect()
}

#[test]
fn test_agency_sees_only_agency_instruments() {
    let engine = EligibilityEngine::default();
    let snapshot = snapshot();

    for tier in MembershipTier::ALL {
        let decisions = engine.evaluate(&Subject::agency(tier), &snapshot, 250_000, NOW);
        assert_eq!(decision_ids(&decisions, true), vec![101, 103]);
    }
}

#[test]
fn test_tourist_tier_lists_are_normalized_in_order() {
    let engine = EligibilityEngine::default();
    let snapshot = snapshot();

    // ["ALL", "silver"] keeps only SILVER
    for tier in MembershipTier::ALL {
        let decisions = engine.evaluate(&Subject::tourist(tier), &snapshot, 250_000, NOW);
        let coupon_102 = decisions.iter().find(|d| d.instrument_id == 102).unwrap();
        assert_eq!(coupon_102.eligible, tier == MembershipTier::Silver);
    }
}

#[test]
fn test_amounts_and_statuses() {
    let engine = EligibilityEngine::default();
    let decisions = engine.evaluate(
        &Subject::tourist(MembershipTier::Gold),
        &snapshot(),
        250_000,
        NOW,
    );

    let by_id = |id: i64| decisions.iter().find(|d| d.instrument_id == id).unwrap();

    assert_eq!(by_id(101).discount_amount, 25_000);
    assert_eq!(by_id(102).discount_amount, 50_000);

    let sold_out = by_id(103);
    assert!(sold_out.eligible);
    assert!(!sold_out.redeemable);
    assert_eq!(sold_out.redeem_status, RedeemStatus::Exhausted);

    let bonus = by_id(201);
    assert_eq!(bonus.kind, InstrumentKind::BonusService);
    assert!(bonus.eligible);
    assert_eq!(bonus.discount_amount, 120_000);
}

#[test]
fn test_amount_coupon_capped_at_price() {
    let engine = EligibilityEngine::default();
    let decisions = engine.evaluate(
        &Subject::tourist(MembershipTier::Silver),
        &snapshot(),
        30_000,
        NOW,
    );
    let coupon = decisions.iter().find(|d| d.instrument_id == 102).unwrap();
    assert_eq!(coupon.discount_amount, 30_000);
}

#[test]
fn test_session_drives_subject_and_quote() {
    let config = EngineConfig::default();
    let engine = EligibilityEngine::new(&config);
    let snapshot = snapshot();

    let mut session = SessionContext::with_total_spent(Role::Agency, 1_500_000);
    session.observe_total_spent(200_000);
    let subject = session.subject(&config.thresholds);
    assert_eq!(subject.tier, MembershipTier::Silver);

    let quote = engine.quote(&subject, &snapshot, 1_000_000, NOW);
    assert_eq!(quote.membership_discount, 50_000);
    assert_eq!(quote.coupon_id, Some(101));
    assert_eq!(quote.coupon_discount, 95_000);
    assert_eq!(quote.payable, 855_000);
}

#[test]
fn test_stale_snapshot_flags_redeemable_coupons() {
    let engine = EligibilityEngine::default();
    let later = NOW + 10 * 60 * 1000;
    let decisions = engine.evaluate(
        &Subject::tourist(MembershipTier::Silver),
        &snapshot(),
        250_000,
        later,
    );

    for decision in &decisions {
        let expect_warning = decision.kind == InstrumentKind::Coupon && decision.redeemable;
        assert_eq!(decision.warning.is_some(), expect_warning, "{decision:?}");
    }
    assert!(decisions.iter().any(|d| d.warning.is_some()));
}

#[test]
fn test_pascal_and_camel_payloads_map_to_same_coupon() {
    let camel: CouponPayload = serde_json::from_str(
        r#"{
            "id": 7,
            "code": "SUMMER",
            "discountKind": "PERCENT",
            "discountValue": 12.5,
            "usageLimit": 10,
            "usageCount": 1,
            "validFrom": "2024-06-01T00:00:00Z",
            "validTo": 1735689600000,
            "active": true,
            "audience": {"forTourist": true, "touristTiers": ["BRONZE", "GOLD"]}
        }"#,
    )
    .unwrap();
    let pascal: CouponPayload = serde_json::from_str(
        r#"{
            "Id": 7,
            "Code": "SUMMER",
            "DiscountKind": "Percent",
            "DiscountValue": 12.5,
            "UsageLimit": 10,
            "UsageCount": 1,
            "ValidFrom": 1717200000000,
            "ValidTo": "2025-01-01T00:00:00Z",
            "Active": true,
            "Audience": {"ForTourist": true, "TouristTiers": ["gold", "bronze"]}
        }"#,
    )
    .unwrap();

    assert_eq!(map_coupon(camel).unwrap(), map_coupon(pascal).unwrap());
}

#[test]
fn test_host_is_never_eligible() {
    let engine = EligibilityEngine::default();
    let snapshot = snapshot();
    let host = Subject::new(Role::Host, MembershipTier::Gold);

    let decisions = engine.evaluate(&host, &snapshot, 250_000, NOW);
    assert!(decision_ids(&decisions, true).is_empty());
    assert!(engine.best_coupon(&host, &snapshot, 250_000, NOW).is_none());
}
