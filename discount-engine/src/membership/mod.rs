//! Membership tiers and member pricing

pub mod discount;
pub mod tier;

pub use discount::{MembershipDiscounts, Quote, membership_discount, quote};
pub use tier::{TierProgress, TierThresholds};
