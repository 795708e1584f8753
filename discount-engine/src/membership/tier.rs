//! Tier derivation from lifetime spend

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::MembershipTier;

pub const DEFAULT_BRONZE_THRESHOLD: u64 = 0;
pub const DEFAULT_SILVER_THRESHOLD: u64 = 1_000_000;
pub const DEFAULT_GOLD_THRESHOLD: u64 = 3_000_000;

/// Minimum lifetime spend (VND) for each tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub bronze: u64,
    pub silver: u64,
    pub gold: u64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            bronze: DEFAULT_BRONZE_THRESHOLD,
            silver: DEFAULT_SILVER_THRESHOLD,
            gold: DEFAULT_GOLD_THRESHOLD,
        }
    }
}

/// Next tier and the spend still missing to reach it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierProgress {
    pub next_tier: MembershipTier,
    pub remaining: u64,
}

impl TierThresholds {
    pub fn new(bronze: u64, silver: u64, gold: u64) -> Self {
        Self {
            bronze,
            silver,
            gold,
        }
    }

    /// Thresholds must be non-decreasing
    pub fn validate(&self) -> AppResult<()> {
        if self.bronze > self.silver || self.silver > self.gold {
            return Err(AppError::with_message(
                ErrorCode::ConfigError,
                format!(
                    "tier thresholds must be non-decreasing (bronze {} / silver {} / gold {})",
                    self.bronze, self.silver, self.gold
                ),
            )
            .with_detail("field", "tierThresholds"));
        }
        Ok(())
    }

    /// Highest tier whose threshold `total_spent` reaches
    pub fn tier_for(&self, total_spent: u64) -> MembershipTier {
        if total_spent >= self.gold {
            MembershipTier::Gold
        } else if total_spent >= self.silver {
            MembershipTier::Silver
        } else if total_spent >= self.bronze {
            MembershipTier::Bronze
        } else {
            MembershipTier::None
        }
    }

    /// Minimum spend for a tier; `None` for the NONE tier
    pub fn threshold_of(&self, tier: MembershipTier) -> Option<u64> {
        match tier {
            MembershipTier::None => None,
            MembershipTier::Bronze => Some(self.bronze),
            MembershipTier::Silver => Some(self.silver),
            MembershipTier::Gold => Some(self.gold),
        }
    }

    /// How far `total_spent` is from the next tier; `None` at the top tier
    pub fn progress(&self, total_spent: u64) -> Option<TierProgress> {
        let current = self.tier_for(total_spent);
        MembershipTier::ALL
            .into_iter()
            .filter(|tier| *tier > current)
            .find_map(|tier| {
                let threshold = self.threshold_of(tier)?;
                (threshold > total_spent).then(|| TierProgress {
                    next_tier: tier,
                    remaining: threshold - total_spent,
                })
            })
    }
}
