//! Session context
//!
//! Explicit per-session state of the signed-in subject: role and the
//! highest lifetime spend observed so far. Callers own it and pass it in;
//! the engine reads no global state.

use shared::models::{MembershipTier, Role};

use crate::membership::TierThresholds;
use crate::models::Subject;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    role: Role,
    total_spent: Option<u64>,
    tier_floor: MembershipTier,
}

impl SessionContext {
    /// Session without a membership record (tier NONE)
    pub fn new(role: Role) -> Self {
        Self {
            role,
            total_spent: None,
            tier_floor: MembershipTier::None,
        }
    }

    pub fn with_total_spent(role: Role, total_spent: u64) -> Self {
        let mut session = Self::new(role);
        session.observe_total_spent(total_spent);
        session
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn total_spent(&self) -> Option<u64> {
        self.total_spent
    }

    /// Record a fetched spend; a lower (stale) value is ignored.
    ///
    /// Returns whether the stored spend changed.
    pub fn observe_total_spent(&mut self, total_spent: u64) -> bool {
        match self.total_spent {
            Some(current) if current >= total_spent => false,
            _ => {
                self.total_spent = Some(total_spent);
                true
            }
        }
    }

    /// Record a tier reported directly by the backend; never lowers the tier
    pub fn observe_tier(&mut self, tier: MembershipTier) {
        self.tier_floor = self.tier_floor.max(tier);
    }

    pub fn tier(&self, thresholds: &TierThresholds) -> MembershipTier {
        let derived = self
            .total_spent
            .map_or(MembershipTier::None, |spent| thresholds.tier_for(spent));
        derived.max(self.tier_floor)
    }

    pub fn subject(&self, thresholds: &TierThresholds) -> Subject {
        Subject::new(self.role, self.tier(thresholds))
    }
}
