//! Payload → domain mapping
//!
//! One mapping function per entity. Every problem with a payload is
//! collected so a form can show all of them at once.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use shared::models::{BonusServicePayload, CouponPayload, InstrumentPayload, TimestampPayload};

use crate::audience::{AudienceDraft, validate_audience_rule};
use crate::core::error::{ValidationError, ValidationErrors};
use crate::models::{BonusService, Coupon, DiscountInstrument};
use crate::utils::validation::{
    validate_coupon_code, validate_discount_value, validate_usage, validate_validity_window,
};

/// Naive datetime layouts accepted besides RFC 3339 (read as UTC)
const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Which end of a window a date-only value stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowBound {
    /// 00:00:00.000 of the day
    Start,
    /// 23:59:59.999 of the day
    End,
}

/// Parse a timestamp payload into Unix millis
///
/// Accepts millis, RFC 3339, naive `YYYY-MM-DDTHH:MM:SS` (UTC) and
/// date-only `YYYY-MM-DD`, expanded according to `bound`.
pub fn parse_timestamp(
    field: &'static str,
    value: &TimestampPayload,
    bound: WindowBound,
) -> Result<i64, ValidationError> {
    let text = match value {
        TimestampPayload::Millis(millis) => return Ok(*millis),
        TimestampPayload::Text(text) => text.trim(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.timestamp_millis());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc().timestamp_millis());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        let naive = match bound {
            WindowBound::Start => date.and_hms_milli_opt(0, 0, 0, 0),
            WindowBound::End => date.and_hms_milli_opt(23, 59, 59, 999),
        };
        if let Some(naive) = naive {
            return Ok(naive.and_utc().timestamp_millis());
        }
    }

    Err(ValidationError::InvalidTimestamp {
        field,
        value: text.to_string(),
    })
}

/// Map a coupon payload into a validated [`Coupon`]
pub fn map_coupon(payload: CouponPayload) -> Result<Coupon, ValidationErrors> {
    let mut errors = Vec::new();

    let code = payload.code.trim().to_string();
    if let Err(e) = validate_coupon_code(&code) {
        errors.push(e);
    }
    if let Err(e) = validate_discount_value(payload.discount_kind, payload.discount_value) {
        errors.push(e);
    }

    let valid_from = parse_timestamp("validFrom", &payload.valid_from, WindowBound::Start)
        .map_err(|e| errors.push(e))
        .ok();
    let valid_to = parse_timestamp("validTo", &payload.valid_to, WindowBound::End)
        .map_err(|e| errors.push(e))
        .ok();
    if let (Some(from), Some(to)) = (valid_from, valid_to)
        && let Err(e) = validate_validity_window(from, to)
    {
        errors.push(e);
    }

    if let Err(e) = validate_usage(payload.usage_count, payload.usage_limit) {
        errors.push(e);
    }

    let audience = validate_audience_rule(&AudienceDraft::from_payload(&payload.audience));

    match (ValidationErrors::from_vec(errors), audience) {
        (None, Ok(audience)) => Ok(Coupon {
            id: payload.id,
            code,
            discount_kind: payload.discount_kind,
            discount_value: payload.discount_value.normalize(),
            usage_limit: payload.usage_limit,
            usage_count: payload.usage_count,
            valid_from: valid_from.unwrap_or_default(),
            valid_to: valid_to.unwrap_or_default(),
            active: payload.active,
            audience,
        }),
        (Some(mut errors), Err(audience_errors)) => {
            errors.extend(audience_errors);
            Err(errors)
        }
        (Some(errors), Ok(_)) | (None, Err(errors)) => Err(errors),
    }
}

/// Map a bonus service payload into a validated [`BonusService`]
pub fn map_bonus_service(payload: BonusServicePayload) -> Result<BonusService, ValidationErrors> {
    let audience = validate_audience_rule(&AudienceDraft::from_payload(&payload.audience))?;
    Ok(BonusService {
        id: payload.id,
        linked_service_id: payload.linked_service_id,
        price: payload.price,
        audience,
    })
}

/// Map either kind of instrument
pub fn map_instrument(payload: InstrumentPayload) -> Result<DiscountInstrument, ValidationErrors> {
    match payload {
        InstrumentPayload::Coupon(coupon) => map_coupon(coupon).map(DiscountInstrument::Coupon),
        InstrumentPayload::BonusService(bonus) => {
            map_bonus_service(bonus).map(DiscountInstrument::BonusService)
        }
    }
}
