//! Audience rules
//!
//! Who a coupon or bonus service is for: a set of roles, each with a tier
//! selection. [`AudienceDraft`] is the editable form state; it becomes an
//! [`AudienceRule`] only through [`validate_audience_rule`].

mod tier_set;

pub use tier_set::TierSet;

use crate::core::error::{ValidationError, ValidationErrors};
use shared::models::{AudiencePayload, MembershipTier, Role, TierChoice};
use std::fmt;

/// Editable audience selection (mirrors the four form fields)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudienceDraft {
    pub for_agency: bool,
    pub agency_tiers: TierSet,
    pub for_tourist: bool,
    pub tourist_tiers: TierSet,
}

impl AudienceDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a payload; tier lists are normalized in list order
    pub fn from_payload(payload: &AudiencePayload) -> Self {
        let fold = |tiers: &Option<Vec<TierChoice>>| {
            TierSet::from_choices(tiers.iter().flatten().copied())
        };
        Self {
            for_agency: payload.for_agency,
            agency_tiers: fold(&payload.agency_tiers),
            for_tourist: payload.for_tourist,
            tourist_tiers: fold(&payload.tourist_tiers),
        }
    }

    /// Toggle a role; disabling a role clears its tiers. `Host` is ignored.
    pub fn set_role(&mut self, role: Role, enabled: bool) {
        let Some((flag, tiers)) = self.slot_mut(role) else {
            return;
        };
        *flag = enabled;
        if !enabled {
            *tiers = TierSet::default();
        }
    }

    pub fn select(&mut self, role: Role, choice: TierChoice) {
        if let Some((_, tiers)) = self.slot_mut(role) {
            tiers.select(choice);
        }
    }

    pub fn deselect(&mut self, role: Role, choice: TierChoice) {
        if let Some((_, tiers)) = self.slot_mut(role) {
            tiers.deselect(choice);
        }
    }

    pub fn to_payload(&self) -> AudiencePayload {
        let list = |enabled: bool, tiers: &TierSet| enabled.then(|| tiers.choices());
        AudiencePayload {
            for_agency: self.for_agency,
            agency_tiers: list(self.for_agency, &self.agency_tiers),
            for_tourist: self.for_tourist,
            tourist_tiers: list(self.for_tourist, &self.tourist_tiers),
        }
    }

    fn slot_mut(&mut self, role: Role) -> Option<(&mut bool, &mut TierSet)> {
        match role {
            Role::Agency => Some((&mut self.for_agency, &mut self.agency_tiers)),
            Role::Tourist => Some((&mut self.for_tourist, &mut self.tourist_tiers)),
            Role::Host => None,
        }
    }
}

impl From<&AudiencePayload> for AudienceDraft {
    fn from(payload: &AudiencePayload) -> Self {
        Self::from_payload(payload)
    }
}

impl From<&AudienceRule> for AudienceDraft {
    fn from(rule: &AudienceRule) -> Self {
        Self {
            for_agency: rule.agency.is_some(),
            agency_tiers: rule.agency.clone().unwrap_or_default(),
            for_tourist: rule.tourist.is_some(),
            tourist_tiers: rule.tourist.clone().unwrap_or_default(),
        }
    }
}

/// Validated audience predicate
///
/// At least one role is targeted and every targeted role has a non-empty
/// tier selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudienceRule {
    agency: Option<TierSet>,
    tourist: Option<TierSet>,
}

impl AudienceRule {
    /// Whether a subject with this role and tier is in the audience
    pub fn admits(&self, role: Role, tier: MembershipTier) -> bool {
        self.tiers_for(role).is_some_and(|tiers| tiers.contains(tier))
    }

    pub fn targets(&self, role: Role) -> bool {
        self.tiers_for(role).is_some()
    }

    /// Tier selection for a role, `None` when the role is not targeted
    pub fn tiers_for(&self, role: Role) -> Option<&TierSet> {
        match role {
            Role::Agency => self.agency.as_ref(),
            Role::Tourist => self.tourist.as_ref(),
            Role::Host => None,
        }
    }

    pub fn to_payload(&self) -> AudiencePayload {
        AudienceDraft::from(self).to_payload()
    }
}

impl fmt::Display for AudienceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [(Role::Agency, &self.agency), (Role::Tourist, &self.tourist)]
            .into_iter()
            .filter_map(|(role, tiers)| tiers.as_ref().map(|t| format!("{role}: {t}")))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Validate a draft into an [`AudienceRule`]
///
/// Every problem is reported, each naming its form field.
pub fn validate_audience_rule(draft: &AudienceDraft) -> Result<AudienceRule, ValidationErrors> {
    let mut errors = Vec::new();

    if !draft.for_agency && !draft.for_tourist {
        errors.push(ValidationError::NoAudience);
    }
    if draft.for_agency && draft.agency_tiers.is_empty() {
        errors.push(ValidationError::EmptyTierSelection { role: Role::Agency });
    }
    if draft.for_tourist && draft.tourist_tiers.is_empty() {
        errors.push(ValidationError::EmptyTierSelection {
            role: Role::Tourist,
        });
    }

    if let Some(errors) = ValidationErrors::from_vec(errors) {
        return Err(errors);
    }

    Ok(AudienceRule {
        agency: draft.for_agency.then(|| draft.agency_tiers.clone()),
        tourist: draft.for_tourist.then(|| draft.tourist_tiers.clone()),
    })
}
