//! Catalog boundary
//!
//! Turns a fetched [`CatalogPayload`] into an immutable [`CatalogSnapshot`]
//! of validated instruments. Invalid instruments are dropped and reported;
//! they never take the rest of the catalog down with them.

mod mapping;

pub use mapping::{WindowBound, map_bonus_service, map_coupon, map_instrument, parse_timestamp};

use serde::Serialize;
use serde_json::Value;
use shared::error::AppResult;
use shared::models::{CatalogPayload, InstrumentPayload};
use tracing::{debug, warn};

use crate::core::error::{ValidationError, ValidationErrors};
use crate::models::{Coupon, DiscountInstrument, InstrumentKind};

/// Immutable, owned snapshot of the discount catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshot {
    fetched_at: i64,
    instruments: Vec<DiscountInstrument>,
}

/// An instrument that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejected {
    /// Position in the payload's instrument list
    pub index: usize,
    /// Absent when the payload carries no readable `id`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument_id: Option<i64>,
    /// Absent when `type` is missing or unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<InstrumentKind>,
    pub errors: ValidationErrors,
}

/// Result of mapping a catalog payload
#[derive(Debug, Clone)]
pub struct MappedCatalog {
    pub snapshot: CatalogSnapshot,
    pub rejected: Vec<Rejected>,
}

impl CatalogSnapshot {
    pub fn new(fetched_at: i64, instruments: Vec<DiscountInstrument>) -> Self {
        Self {
            fetched_at,
            instruments,
        }
    }

    /// Map a payload; a missing `fetchedAt` means the snapshot was fetched at `now`
    ///
    /// Fails only when `fetchedAt` itself is unreadable.
    pub fn from_payload(payload: CatalogPayload, now: i64) -> AppResult<MappedCatalog> {
        let fetched_at = match &payload.fetched_at {
            Some(ts) => parse_timestamp("fetchedAt", ts, WindowBound::Start)?,
            None => now,
        };

        let mut instruments = Vec::with_capacity(payload.instruments.len());
        let mut rejected = Vec::new();

        for (index, item) in payload.instruments.into_iter().enumerate() {
            let (instrument_id, kind) = instrument_header(&item);
            let converted = serde_json::from_value::<InstrumentPayload>(item).map_err(|e| {
                ValidationErrors::from(ValidationError::MalformedInstrument {
                    message: e.to_string(),
                })
            });
            match converted.and_then(map_instrument) {
                Ok(instrument) => instruments.push(instrument),
                Err(errors) => {
                    warn!(
                        index,
                        ?instrument_id,
                        ?kind,
                        errors = %errors,
                        "Dropping invalid catalog instrument"
                    );
                    rejected.push(Rejected {
                        index,
                        instrument_id,
                        kind,
                        errors,
                    });
                }
            }
        }

        debug!(
            fetched_at,
            accepted = instruments.len(),
            rejected = rejected.len(),
            "Catalog snapshot mapped"
        );

        Ok(MappedCatalog {
            snapshot: Self::new(fetched_at, instruments),
            rejected,
        })
    }

    pub fn fetched_at(&self) -> i64 {
        self.fetched_at
    }

    pub fn instruments(&self) -> &[DiscountInstrument] {
        &self.instruments
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    pub fn coupons(&self) -> impl Iterator<Item = &Coupon> {
        self.instruments.iter().filter_map(DiscountInstrument::as_coupon)
    }

    /// Every coupon carrying `code` (case-insensitive), in catalog order
    ///
    /// Codes are not unique across a snapshot.
    pub fn coupons_by_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Coupon> + 'a {
        let code = code.trim();
        self.coupons().filter(move |c| c.code().eq_ignore_ascii_case(code))
    }
}

/// Id and kind read from a raw instrument, for reporting
fn instrument_header(item: &Value) -> (Option<i64>, Option<InstrumentKind>) {
    let id = item
        .get("id")
        .or_else(|| item.get("Id"))
        .and_then(Value::as_i64);
    let kind = match item.get("type").and_then(Value::as_str) {
        Some("COUPON") => Some(InstrumentKind::Coupon),
        Some("BONUS_SERVICE") => Some(InstrumentKind::BonusService),
        _ => None,
    };
    (id, kind)
}
