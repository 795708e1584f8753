//! Discount instruments
//!
//! Validated counterparts of the shared payloads. Fields are crate-private;
//! instances come from [`crate::catalog::map_coupon`] and
//! [`crate::catalog::map_bonus_service`].

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::DiscountKind;

use crate::audience::AudienceRule;

/// Coupon owned by a host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    pub(crate) id: i64,
    pub(crate) code: String,
    pub(crate) discount_kind: DiscountKind,
    /// Percentage (0, 100] or whole currency amount
    pub(crate) discount_value: Decimal,
    pub(crate) usage_limit: u32,
    pub(crate) usage_count: u32,
    /// Unix millis, inclusive
    pub(crate) valid_from: i64,
    /// Unix millis, inclusive
    pub(crate) valid_to: i64,
    pub(crate) active: bool,
    pub(crate) audience: AudienceRule,
}

impl Coupon {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn discount_kind(&self) -> DiscountKind {
        self.discount_kind
    }

    pub fn discount_value(&self) -> Decimal {
        self.discount_value
    }

    pub fn usage_limit(&self) -> u32 {
        self.usage_limit
    }

    pub fn usage_count(&self) -> u32 {
        self.usage_count
    }

    pub fn valid_from(&self) -> i64 {
        self.valid_from
    }

    pub fn valid_to(&self) -> i64 {
        self.valid_to
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn audience(&self) -> &AudienceRule {
        &self.audience
    }
}

/// Bonus service ("privilege"): a linked service granted free
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusService {
    pub(crate) id: i64,
    pub(crate) linked_service_id: i64,
    pub(crate) price: u64,
    pub(crate) audience: AudienceRule,
}

impl BonusService {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn linked_service_id(&self) -> i64 {
        self.linked_service_id
    }

    /// List price of the linked service, i.e. the value of the grant
    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn audience(&self) -> &AudienceRule {
        &self.audience
    }
}

/// Instrument kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentKind {
    Coupon,
    BonusService,
}

/// Anything that can be granted to a subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountInstrument {
    Coupon(Coupon),
    BonusService(BonusService),
}

impl DiscountInstrument {
    pub fn id(&self) -> i64 {
        match self {
            Self::Coupon(c) => c.id,
            Self::BonusService(b) => b.id,
        }
    }

    pub fn kind(&self) -> InstrumentKind {
        match self {
            Self::Coupon(_) => InstrumentKind::Coupon,
            Self::BonusService(_) => InstrumentKind::BonusService,
        }
    }

    pub fn audience(&self) -> &AudienceRule {
        match self {
            Self::Coupon(c) => &c.audience,
            Self::BonusService(b) => &b.audience,
        }
    }

    pub fn as_coupon(&self) -> Option<&Coupon> {
        match self {
            Self::Coupon(c) => Some(c),
            Self::BonusService(_) => None,
        }
    }

    pub fn as_bonus_service(&self) -> Option<&BonusService> {
        match self {
            Self::BonusService(b) => Some(b),
            Self::Coupon(_) => None,
        }
    }
}

impl From<Coupon> for DiscountInstrument {
    fn from(coupon: Coupon) -> Self {
        Self::Coupon(coupon)
    }
}

impl From<BonusService> for DiscountInstrument {
    fn from(bonus: BonusService) -> Self {
        Self::BonusService(bonus)
    }
}
