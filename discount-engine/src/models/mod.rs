//! Domain models

pub mod instrument;
pub mod subject;

pub use instrument::{BonusService, Coupon, DiscountInstrument, InstrumentKind};
pub use subject::Subject;
