//! Evaluation subject

use serde::Serialize;
use shared::models::{MembershipTier, Role};

/// Who is asking: role and current membership tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Subject {
    pub role: Role,
    pub tier: MembershipTier,
}

impl Subject {
    pub fn new(role: Role, tier: MembershipTier) -> Self {
        Self { role, tier }
    }

    pub fn tourist(tier: MembershipTier) -> Self {
        Self::new(Role::Tourist, tier)
    }

    pub fn agency(tier: MembershipTier) -> Self {
        Self::new(Role::Agency, tier)
    }
}
