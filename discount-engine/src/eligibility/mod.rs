//! Eligibility and discount resolution
//!
//! - [`matcher`]: audience matching
//! - [`calculator`]: discount amounts
//! - [`redeem`]: redeemability and snapshot staleness
//! - [`engine`]: per-snapshot evaluation

pub mod calculator;
pub mod engine;
pub mod matcher;
pub mod redeem;

pub use calculator::{compute_discount, grant_value};
pub use engine::{Decision, EligibilityEngine};
pub use matcher::is_eligible;
pub use redeem::{RedeemStatus, StaleStateWarning, check_staleness, is_redeemable, redeem_status};
