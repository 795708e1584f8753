//! Catalog Payload Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::bonus_service::BonusServicePayload;
use super::coupon::{CouponPayload, TimestampPayload};

/// One discount instrument, tagged by `type`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentPayload {
    Coupon(CouponPayload),
    BonusService(BonusServicePayload),
}

/// Catalog snapshot as fetched from the backend
///
/// Instruments stay raw JSON here so each one can be converted, and
/// rejected, on its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPayload {
    /// When the snapshot was fetched; absent means "now"
    #[serde(default, alias = "FetchedAt", skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<TimestampPayload>,
    #[serde(default, alias = "Instruments")]
    pub instruments: Vec<Value>,
}

impl CatalogPayload {
    /// Build a payload from typed instruments
    pub fn from_instruments(
        fetched_at: Option<TimestampPayload>,
        instruments: impl IntoIterator<Item = InstrumentPayload>,
    ) -> serde_json::Result<Self> {
        Ok(Self {
            fetched_at,
            instruments: instruments
                .into_iter()
                .map(serde_json::to_value)
                .collect::<serde_json::Result<_>>()?,
        })
    }
}
