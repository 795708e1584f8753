//! Coupon Payload Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::audience::AudiencePayload;

/// Discount kind enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    /// `discount_value` is a percentage (10 = 10%)
    #[serde(alias = "Percent", alias = "percent")]
    Percent,
    /// `discount_value` is a whole currency amount (50000 = 50.000₫)
    #[serde(alias = "Amount", alias = "amount")]
    Amount,
}

/// Point in time as sent by the backend
///
/// Either Unix millis or an RFC 3339 / `YYYY-MM-DDTHH:MM:SS` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampPayload {
    Millis(i64),
    Text(String),
}

impl From<i64> for TimestampPayload {
    fn from(millis: i64) -> Self {
        TimestampPayload::Millis(millis)
    }
}

/// Coupon as returned by the host-scoped coupon endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponPayload {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "Code")]
    pub code: String,
    #[serde(alias = "DiscountKind")]
    pub discount_kind: DiscountKind,
    /// Percentage (0–100] or whole currency amount, depending on `discount_kind`
    #[serde(alias = "DiscountValue", with = "rust_decimal::serde::float")]
    pub discount_value: Decimal,
    #[serde(alias = "UsageLimit")]
    pub usage_limit: u32,
    #[serde(default, alias = "UsageCount")]
    pub usage_count: u32,
    #[serde(alias = "ValidFrom")]
    pub valid_from: TimestampPayload,
    #[serde(alias = "ValidTo")]
    pub valid_to: TimestampPayload,
    #[serde(default = "default_active", alias = "Active")]
    pub active: bool,
    #[serde(default, alias = "Audience")]
    pub audience: AudiencePayload,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let payload: CouponPayload = serde_json::from_str(
            r#"{
                "id": 7,
                "code": "SUMMER-10",
                "discountKind": "PERCENT",
                "discountValue": 12.5,
                "usageLimit": 100,
                "usageCount": 3,
                "validFrom": 1700000000000,
                "validTo": "2030-01-01T00:00:00Z",
                "audience": {"forTourist": true, "touristTiers": ["ALL"]}
            }"#,
        )
        .unwrap();

        assert_eq!(payload.discount_kind, DiscountKind::Percent);
        assert_eq!(payload.discount_value, Decimal::new(125, 1));
        assert_eq!(payload.valid_from, TimestampPayload::Millis(1_700_000_000_000));
        assert_eq!(
            payload.valid_to,
            TimestampPayload::Text("2030-01-01T00:00:00Z".to_string())
        );
        assert!(payload.active);
        assert!(payload.audience.for_tourist);
    }

    #[test]
    fn test_deserialize_pascal_case() {
        let payload: CouponPayload = serde_json::from_str(
            r#"{
                "Id": 8,
                "Code": "AGENT50K",
                "DiscountKind": "Amount",
                "DiscountValue": 50000,
                "UsageLimit": 10,
                "ValidFrom": 0,
                "ValidTo": 1,
                "Active": false,
                "Audience": {"ForAgency": true, "AgencyTiers": ["GOLD"]}
            }"#,
        )
        .unwrap();

        assert_eq!(payload.discount_kind, DiscountKind::Amount);
        assert_eq!(payload.discount_value, Decimal::from(50000));
        assert_eq!(payload.usage_count, 0);
        assert!(!payload.active);
        assert!(payload.audience.for_agency);
    }
}
